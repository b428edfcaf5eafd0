//! 访客确认 API 模块
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /api/rsvp | POST | 提交出席确认 | 无 (公开) |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub use handler::SubmitResponse;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/rsvp", post(handler::submit))
}
