//! Helpers that turn store results into early HTTP responses.
//!
//! Handlers return `HttpResponse` directly, so each helper yields a
//! `DbResult<T>` whose error side is the response to send:
//!
//! ```ignore
//! let goal = or_respond!(require_record(
//!     update_goal(&pool, user_id, goal_id, &form).await,
//!     "Goal not found"
//! ));
//! ```

use actix_web::HttpResponse;

use crate::db::StoreError;
use crate::models::common::ApiResponse;
use crate::tracking::validation::ValidationError;

/// Returns the error side of a `DbResult` from the enclosing handler.
#[macro_export]
macro_rules! or_respond {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(response) => return response,
        }
    };
}

/// Result type for database operations that return an HttpResponse on error
pub type DbResult<T> = Result<T, HttpResponse>;

fn database_error(e: &dyn std::fmt::Display) -> HttpResponse {
    tracing::error!("Database error: {}", e);
    HttpResponse::InternalServerError().json(ApiResponse::<()>::error("Database error"))
}

/// Unwrap an optional database result, returning NotFound if None.
pub fn require_record<T>(result: Result<Option<T>, sqlx::Error>, not_found_message: &str) -> DbResult<T> {
    match result {
        Ok(Some(record)) => Ok(record),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::<()>::error(not_found_message))),
        Err(e) => Err(database_error(&e)),
    }
}

/// Unwrap a database result, returning InternalServerError on error.
pub fn db_result<T>(result: Result<T, sqlx::Error>) -> DbResult<T> {
    result.map_err(|e| database_error(&e))
}

pub fn store_result<T>(result: Result<T, StoreError>) -> DbResult<T> {
    result.map_err(|e| database_error(&e))
}

/// Rejected input is answered with 400 and never stored.
pub fn validated<T>(result: Result<T, ValidationError>) -> DbResult<T> {
    result.map_err(|e| {
        tracing::warn!("Rejected input: {}", e);
        HttpResponse::BadRequest().json(ApiResponse::<()>::error_with_message("Invalid input", e.to_string()))
    })
}
