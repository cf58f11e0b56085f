//! Resolves the authenticated user from the `Authorization` header.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use tracing::debug;
use uuid::Uuid;

use crate::api::AppState;
use crate::auth::verify_token;
use crate::error::ApiError;
use crate::models::User;

/// The user a request is acting as. Add it to a handler's arguments to make
/// the route require a valid bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

/// Extracts the token from `Authorization: Bearer <token>`; the scheme is
/// matched case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let scheme = value.get(..7)?;
    if !scheme.eq_ignore_ascii_case("bearer ") {
        return None;
    }
    Some(value[7..].trim()).filter(|token| !token.is_empty())
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)
            .ok_or_else(|| ApiError::Unauthorized("Token missing".into()))?;

        let secret = state
            .config
            .jwt_secret
            .as_deref()
            .ok_or_else(|| ApiError::Internal("JWT secret not configured".into()))?;

        let claims = verify_token(token, secret).map_err(|e| {
            debug!("Rejected bearer token: {}", e);
            ApiError::Unauthorized("Token invalid".into())
        })?;
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ApiError::Unauthorized("Token invalid".into()))?;

        let users = state.users.read().await;
        let user = users
            .get(user_id)
            .cloned()
            .ok_or_else(|| ApiError::Unauthorized("User not found".into()))?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_extracted() {
        assert_eq!(bearer_token(&headers("Bearer abc.def")), Some("abc.def"));
        assert_eq!(bearer_token(&headers("bearer abc.def")), Some("abc.def"));
    }

    #[test]
    fn test_bearer_token_missing_or_other_scheme() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
        assert_eq!(bearer_token(&headers("Basic dXNlcjpwYXNz")), None);
        assert_eq!(bearer_token(&headers("Bearer ")), None);
        assert_eq!(bearer_token(&headers("Bear")), None);
    }
}
