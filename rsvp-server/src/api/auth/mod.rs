//! 认证 API 模块
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /api/auth/login | POST | 管理员登录 | 无 |
//! | /api/auth/me | GET | 当前登录信息 | JWT |
//! | /api/auth/logout | POST | 登出 | JWT |

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub use handler::{LoginRequest, LoginResponse, UserInfo};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/auth/login", post(handler::login))
        .route("/api/auth/me", get(handler::me))
        .route("/api/auth/logout", post(handler::logout))
}
