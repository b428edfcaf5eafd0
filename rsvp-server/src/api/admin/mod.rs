//! 管理面板 API 模块
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | /api/admin/rsvps | GET | 确认列表 + 统计 | JWT |
//! | /api/admin/rsvps/export | GET | CSV 导出 | JWT |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub use handler::{ListQuery, ListResponse};

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/admin/rsvps", get(handler::list))
        .route("/api/admin/rsvps/export", get(handler::export))
}
