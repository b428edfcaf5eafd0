//! 统一错误处理
//!
//! 提供应用级错误类型和响应结构：
//! - [`AppError`] - 应用错误枚举
//! - [`AppResponse`] - API 响应结构
//!
//! # 错误码规范
//!
//! | 前缀 | 分类 | 示例 |
//! |------|------|------|
//! | E1xxx | 登录错误 | E1001 凭证无效 |
//! | E3xxx | 认证令牌错误 | E3002 无效令牌 |
//! | E9xxx | 系统错误 | E9002 数据库错误 |
//!
//! 面向访客的错误消息为西班牙语（与前端文案一致），
//! 内部细节只进日志，不进响应体。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use shared::admin::MSG_LOAD_FAILED;
use shared::submit::MSG_SAVE_FAILED;

/// API 统一响应结构
///
/// ```json
/// {
///   "code": "E0000",
///   "message": "Success",
///   "data": { ... }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AppResponse<T> {
    /// 错误码 (E0000 表示成功)
    pub code: String,
    /// 消息
    pub message: String,
    /// 响应数据
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 认证错误 (4xx) ==========
    #[error("Authentication required")]
    /// 未登录 (401)
    Unauthorized,

    #[error("Token expired")]
    /// 令牌过期 (401)
    TokenExpired,

    #[error("Invalid token")]
    /// 无效令牌 (401)
    InvalidToken,

    #[error("Credenciales incorrectas")]
    /// 凭证无效 (401)，登录邮箱/密码错误时统一返回
    InvalidCredentials,

    #[error("Error al iniciar sesión: {0}")]
    /// 登录过程中的非凭证错误 (500)
    LoginFailed(String),

    // ========== 业务逻辑错误 (4xx) ==========
    #[error("Validation failed: {0}")]
    /// 验证失败 (400)，消息为西班牙语错误列表
    Validation(String),

    // ========== 系统错误 (5xx) ==========
    #[error("Save failed: {0}")]
    /// 写入失败 (500)，响应体为固定的西班牙语提示
    SaveFailed(String),

    #[error("Load failed: {0}")]
    /// 读取失败 (500)，响应体为固定的西班牙语提示
    LoadFailed(String),

    #[error("Database error: {0}")]
    /// 数据库错误 (500)
    Database(String),

    #[error("Internal server error: {0}")]
    /// 内部错误 (500)
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // Authentication errors (401)
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "E3001", "Please login first"),
            AppError::TokenExpired => (StatusCode::UNAUTHORIZED, "E3003", "Token expired"),
            AppError::InvalidToken => (StatusCode::UNAUTHORIZED, "E3002", "Invalid token"),
            AppError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "E1001", "Credenciales incorrectas")
            }

            // Login failure other than bad credentials (500)
            AppError::LoginFailed(msg) => {
                error!(target: "auth", error = %msg, "Login error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E1002",
                    "Error al iniciar sesión",
                )
            }

            // Validation (400)
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "E0002", msg.as_str()),

            // RSVP write failures (500): log the detail, answer with the
            // fixed guest-facing message
            AppError::SaveFailed(msg) => {
                error!(target: "database", error = %msg, "RSVP write failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "E9003", MSG_SAVE_FAILED)
            }

            // RSVP read failures (500)
            AppError::LoadFailed(msg) => {
                error!(target: "database", error = %msg, "RSVP read failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "E9004", MSG_LOAD_FAILED)
            }

            // Database errors (500)
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "E9002", "Database error")
            }

            // Internal errors (500)
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9001",
                    "Internal server error",
                )
            }
        };

        let body = Json(AppResponse::<()> {
            code: code.to_string(),
            message: message.to_string(),
            data: None,
        });

        (status, body).into_response()
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn save_failed(msg: impl Into<String>) -> Self {
        Self::SaveFailed(msg.into())
    }

    pub fn load_failed(msg: impl Into<String>) -> Self {
        Self::LoadFailed(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn login_failed(msg: impl Into<String>) -> Self {
        Self::LoginFailed(msg.into())
    }
}
