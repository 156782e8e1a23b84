pub mod appointments;
pub mod goals;
pub mod health_metrics;
pub mod helpers;
pub mod medications;
pub mod sleep_records;
pub mod users;

/// Failure of a storage backend behind one of the store traits.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("{0}")]
    Backend(String),
}
