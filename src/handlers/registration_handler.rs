use actix_web::{web, HttpResponse};
use secrecy::ExposeSecret;
use sqlx::PgPool;

use crate::db::users::{insert_user, is_unique_violation};
use crate::models::common::ApiResponse;
use crate::models::user::RegistrationRequest;
use crate::utils::password::hash_password;

const MAX_USERNAME_LENGTH: usize = 150;

#[tracing::instrument(
    name = "Adding a new user",
    // Don't show arguments
    skip(user_form, pool),
    fields(
        username = %user_form.username,
        email = %user_form
    )
)]
pub async fn register_user(
    user_form: web::Json<RegistrationRequest>,
    pool: web::Data<PgPool>
) -> HttpResponse {
    let username = user_form.username.trim();
    if username.is_empty() || username.chars().count() > MAX_USERNAME_LENGTH {
        tracing::info!("Rejected username");
        return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Invalid username"));
    }
    if user_form.password.expose_secret().is_empty() {
        return HttpResponse::BadRequest().json(ApiResponse::<()>::error("Password is required"));
    }

    let password_hash = match hash_password(user_form.password.expose_secret()) {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!("Failed to hash password: {:?}", e);
            return HttpResponse::InternalServerError().finish();
        }
    };

    match insert_user(&pool, username, user_form.email.trim(), &password_hash).await {
        Ok(user_id) => {
            tracing::info!("User registered: {}", user_id);
            HttpResponse::Ok().json(ApiResponse::success("User registered", user_id))
        }
        Err(e) if is_unique_violation(&e) => {
            tracing::info!("Username already taken");
            HttpResponse::Conflict().json(ApiResponse::<()>::error("Username already taken"))
        }
        Err(e) => {
            tracing::error!("Failed to execute user insert query: {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
