//! Authentication Handlers
//!
//! Handles admin login, logout, and session introspection.

use std::time::Duration;

use axum::{Extension, Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::{AppError, AppResult};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Login request payload
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Admin info returned to the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
}

/// Login response payload
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// Login handler
///
/// Authenticates admin credentials and returns a JWT token.
/// Bad email and bad password answer identically to prevent enumeration.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let repo = state.admin_user_repository();

    let admin = repo
        .find_by_email(&req.email)
        .await
        .map_err(|e| AppError::login_failed(format!("Admin lookup failed: {e}")))?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let admin = match admin {
        Some(a) => {
            let password_valid = a.verify_password(&req.password).map_err(|e| {
                AppError::login_failed(format!("Password verification failed: {e}"))
            })?;

            if !password_valid {
                tracing::warn!(email = %req.email, "Login failed - invalid credentials");
                return Err(AppError::InvalidCredentials);
            }

            a
        }
        None => {
            tracing::warn!(email = %req.email, "Login failed - admin not found");
            return Err(AppError::InvalidCredentials);
        }
    };

    let user_id = admin.id.as_ref().map(|t| t.to_string()).unwrap_or_default();

    let jwt_service = state.get_jwt_service();
    let token = jwt_service
        .generate_token(&user_id, &admin.email)
        .map_err(|e| AppError::login_failed(format!("Failed to generate token: {e}")))?;

    tracing::info!(user_id = %user_id, email = %admin.email, "Admin logged in");

    Ok(Json(LoginResponse {
        token,
        user: UserInfo {
            id: user_id,
            email: admin.email,
        },
    }))
}

/// Get current admin info
pub async fn me(Extension(user): Extension<CurrentUser>) -> AppResult<Json<UserInfo>> {
    Ok(Json(UserInfo {
        id: user.id,
        email: user.email,
    }))
}

/// Logout handler
///
/// Tokens are stateless; logout only logs the event, the client drops the
/// token.
pub async fn logout(Extension(user): Extension<CurrentUser>) -> AppResult<Json<()>> {
    tracing::info!(user_id = %user.id, email = %user.email, "Admin logged out");
    Ok(Json(()))
}
