use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use secrecy::ExposeSecret;
use uuid::Uuid;

use crate::config::jwt::JwtSettings;
use crate::middleware::auth::Claims;

/// Signs an HS256 token for `user_id` that expires after the configured
/// number of hours.
pub fn issue_token(
    jwt_settings: &JwtSettings,
    user_id: Uuid,
    username: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let expires_at = Utc::now() + Duration::hours(jwt_settings.expiration_hours);

    let claims = Claims::new(user_id, username, expires_at);

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_settings.secret.expose_secret().as_bytes()),
    )
}
