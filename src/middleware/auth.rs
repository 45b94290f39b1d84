use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use axum_extra::extract::cookie::CookieJar;

use crate::{error::AppError, models::AuthContext};

/// Cookie set by the login flow holding the caller's access token
pub const ACCESS_TOKEN_COOKIE: &str = "spotify_access_token";

/// Reads the caller's token from `Authorization: Bearer` or, failing that,
/// the access token cookie
fn extract_token(parts: &Parts) -> Option<String> {
    let bearer = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty());

    if let Some(token) = bearer {
        return Some(token.to_string());
    }

    CookieJar::from_headers(&parts.headers)
        .get(ACCESS_TOKEN_COOKIE)
        .map(|cookie| cookie.value_trimmed())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
}

#[async_trait::async_trait]
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        extract_token(parts)
            .map(AuthContext::new)
            .ok_or_else(|| AppError::Unauthenticated("Not authenticated".to_string()))
    }
}
