use std::path::PathBuf;
use std::sync::Arc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::db::models::{AdminUser, AdminUserCreate};
use crate::db::repository::{AdminUserRepository, RsvpRepository};

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式数据库 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 代替
    pub fn new(config: Config, db: Surreal<Db>, jwt_service: Arc<JwtService>) -> Self {
        Self {
            config,
            db,
            jwt_service,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (确保目录存在)
    /// 2. 数据库 (work_dir/database/rsvp.db)
    /// 3. 播种初始管理员账号
    /// 4. JWT 服务
    ///
    /// # Panics
    ///
    /// 数据库初始化失败时 panic
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        let db_path = config.database_dir().join("rsvp.db");
        let db_service = DbService::new(&db_path.to_string_lossy())
            .await
            .expect("Failed to initialize database");
        let db = db_service.db;

        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        let state = Self::new(config.clone(), db, jwt_service);
        state.seed_admin_user().await;
        state
    }

    /// 播种初始管理员账号
    ///
    /// 仅当 ADMIN_EMAIL 和 ADMIN_PASSWORD 都已配置且 admin_user 表为空时创建。
    /// 已有账号时环境变量不生效，避免覆盖已修改的密码。
    async fn seed_admin_user(&self) {
        let (Some(email), Some(password)) =
            (&self.config.admin_email, &self.config.admin_password)
        else {
            tracing::warn!("ADMIN_EMAIL/ADMIN_PASSWORD not set, skipping admin seeding");
            return;
        };

        let repo = AdminUserRepository::new(self.db.clone());
        match repo.count().await {
            Ok(0) => {}
            Ok(n) => {
                tracing::debug!(admins = n, "Admin accounts already present, skipping seed");
                return;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to check admin accounts");
                return;
            }
        }

        let hash_pass = match AdminUser::hash_password(password) {
            Ok(h) => h,
            Err(e) => {
                tracing::error!(error = %e, "Failed to hash admin password");
                return;
            }
        };

        match repo
            .create(AdminUserCreate {
                email: email.clone(),
                hash_pass,
            })
            .await
        {
            Ok(_) => tracing::info!(email = %email, "Seeded initial admin account"),
            Err(e) => tracing::error!(error = %e, "Failed to seed admin account"),
        }
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }

    /// 获取 RSVP 仓库
    pub fn rsvp_repository(&self) -> RsvpRepository {
        RsvpRepository::new(self.db.clone())
    }

    /// 获取管理员仓库
    pub fn admin_user_repository(&self) -> AdminUserRepository {
        AdminUserRepository::new(self.db.clone())
    }

    /// 获取工作目录
    pub fn work_dir(&self) -> PathBuf {
        PathBuf::from(&self.config.work_dir)
    }
}
