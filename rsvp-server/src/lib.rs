//! RSVP Server - 婚礼邀请确认服务
//!
//! # 架构概述
//!
//! 本模块是 RSVP 服务的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储 (追加写入的确认记录表)
//! - **认证** (`auth`): JWT + Argon2 管理员认证
//! - **HTTP API** (`api`): 访客提交接口与管理面板接口
//!
//! 领域逻辑 (表单、验证、映射、聚合) 在 `shared` crate 中，
//! 本 crate 只负责把它接到 HTTP 和持久化上。
//!
//! # 模块结构
//!
//! ```text
//! rsvp-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证
//! ├── api/           # HTTP 路由和处理器
//! ├── utils/         # 错误、日志
//! └── db/            # 数据库层
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService};
pub use crate::core::{Config, Server, ServerState, build_router};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境：加载 .env 并初始化日志
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();

    let log_dir = std::env::var("LOG_DIR").ok();
    let log_level = std::env::var("LOG_LEVEL").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____  _______    ______
   / __ \/ ___/ |  / / __ \
  / /_/ /\__ \| | / / /_/ /
 / _, _/___/ /| |/ / ____/
/_/ |_|/____/ |___/_/
    "#
    );
}
