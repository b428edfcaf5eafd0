//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 管理员认证接口
//! - [`rsvp`] - 访客确认提交接口 (公开)
//! - [`admin`] - 管理面板接口 (需认证)

pub mod admin;
pub mod auth;
pub mod health;
pub mod rsvp;
