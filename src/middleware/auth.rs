//! Bearer-token guard for the tracking scopes. A request that passes gets
//! its decoded [`Claims`] in the request extensions, where handlers read
//! them through `web::ReqData<Claims>`.

use std::future::{ready, Ready};

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    error::ErrorUnauthorized,
    http::header::{self, HeaderValue},
    web, Error, HttpMessage,
};
use chrono::{DateTime, Utc};
use futures_util::future::LocalBoxFuture;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::jwt::JwtSettings;

/// Token payload. `sub` holds the user id in its hyphenated form.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,
    pub username: String,
    pub exp: usize,
}

impl Claims {
    pub fn new(user_id: Uuid, username: &str, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: user_id.to_string(),
            username: username.to_string(),
            exp: expires_at.timestamp().max(0) as usize,
        }
    }

    /// `None` when the subject is not a user id.
    pub fn user_id(&self) -> Option<Uuid> {
        self.sub.parse().ok()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("No authorization header")]
    MissingHeader,
    #[error("Invalid authorization header format")]
    NotBearer,
    #[error("Invalid token")]
    Rejected,
    #[error("Token signing is not configured")]
    NotConfigured,
}

fn bearer_token(value: Option<&HeaderValue>) -> Result<&str, TokenError> {
    let value = value.ok_or(TokenError::MissingHeader)?;
    value
        .to_str()
        .ok()
        .and_then(|raw| raw.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(TokenError::NotBearer)
}

/// Verifies an HS256 token against the configured secret, expiry included.
pub fn decode_claims(token: &str, jwt_settings: &JwtSettings) -> Result<Claims, TokenError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_settings.secret.expose_secret().as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|e| {
        tracing::warn!("Failed to decode token: {:?}", e);
        TokenError::Rejected
    })
}

fn authenticate(req: &ServiceRequest) -> Result<Claims, TokenError> {
    let jwt_settings = req
        .app_data::<web::Data<JwtSettings>>()
        .ok_or(TokenError::NotConfigured)?;
    let token = bearer_token(req.headers().get(header::AUTHORIZATION))?;
    decode_claims(token, jwt_settings)
}

pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        match authenticate(&req) {
            Ok(claims) => {
                tracing::debug!("Authenticated {}", claims.username);
                req.extensions_mut().insert(claims);
                Box::pin(self.service.call(req))
            }
            Err(e) => {
                tracing::info!("Rejected {} {}: {}", req.method(), req.path(), e);
                Box::pin(ready(Err(ErrorUnauthorized(e.to_string()))))
            }
        }
    }
}
