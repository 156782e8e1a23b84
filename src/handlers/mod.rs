use actix_web::HttpResponse;
use uuid::Uuid;

use crate::db::helpers::DbResult;
use crate::middleware::auth::Claims;
use crate::models::common::ApiResponse;

pub mod appointment_handler;
pub mod auth_handler;
pub mod backend_health_handler;
pub mod goal_handler;
pub mod health_handler;
pub mod medication_handler;
pub mod registration_handler;
pub mod report_handler;
pub mod sleep_handler;

/// The authenticated user's id, or 400 when the token subject is not a UUID.
pub fn claimed_user_id(claims: &Claims) -> DbResult<Uuid> {
    claims.user_id().ok_or_else(|| {
        tracing::error!("Token subject is not a valid user id: {}", claims.sub);
        HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid user ID"))
    })
}

/// Today's date in the server's local time zone.
pub fn local_today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
