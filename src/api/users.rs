//! Account Handlers
//!
//! Registration and login.

use axum::{extract::State, http::StatusCode, Json};
use tracing::{info, warn};

use super::json::ApiJson;
use crate::api::AppState;
use crate::auth::{hash_password, issue_token, verify_password};
use crate::error::{ApiError, Result};
use crate::models::{CreateUserRequest, LoginRequest, LoginResponse, UserProfile};
use crate::store::NewUser;

/// Handler for POST /users
///
/// Registers an account. Usernames and emails must be unique.
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserProfile>)> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    // Hashing runs on the blocking pool
    let password = req.password;
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| ApiError::Internal(format!("Failed to create user: {e}")))??;

    let user = state.users.write().await.insert(NewUser {
        name: req.name,
        email: req.email,
        username: req.username,
        password_hash,
    })?;
    info!("Registered user {}", user.username);

    Ok((StatusCode::CREATED, Json(user.profile())))
}

/// Handler for POST /login
///
/// Verifies the password and issues a bearer token.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    let user = state
        .users
        .read()
        .await
        .find_by_username(&req.username)
        .cloned()
        .ok_or_else(invalid_credentials)?;

    let password = req.password;
    let password_hash = user.password_hash.clone();
    let verified = tokio::task::spawn_blocking(move || verify_password(&password, &password_hash))
        .await
        .map_err(|e| ApiError::Internal(format!("Login failed: {e}")))?;
    if !verified {
        warn!("Failed login for {}", user.username);
        return Err(invalid_credentials());
    }

    let secret = state
        .config
        .jwt_secret
        .as_deref()
        .ok_or_else(|| ApiError::Internal("JWT secret not configured".into()))?;
    let ttl = chrono::Duration::hours(state.config.token_ttl_hours);
    let token = issue_token(&user, secret, ttl)
        .map_err(|e| ApiError::Internal(format!("Login failed: {e}")))?;

    Ok(Json(LoginResponse {
        token,
        user: user.profile(),
    }))
}

fn invalid_credentials() -> ApiError {
    ApiError::Unauthorized("Invalid username or password".into())
}
