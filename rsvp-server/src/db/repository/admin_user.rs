//! Admin User Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{AdminUser, AdminUserCreate};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "admin_user";

#[derive(Clone)]
pub struct AdminUserRepository {
    base: BaseRepository,
}

impl AdminUserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find admin by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<AdminUser>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM admin_user WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let users: Vec<AdminUser> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Count admin accounts
    pub async fn count(&self) -> RepoResult<usize> {
        let mut result = self
            .base
            .db()
            .query("SELECT count() FROM admin_user GROUP ALL")
            .await?;
        let rows: Vec<serde_json::Value> = result.take(0)?;
        Ok(rows
            .first()
            .and_then(|r| r["count"].as_u64())
            .unwrap_or(0) as usize)
    }

    /// Create a new admin account
    pub async fn create(&self, data: AdminUserCreate) -> RepoResult<AdminUser> {
        // Unique email index also guards this, but fail early with a
        // readable error
        if self.find_by_email(&data.email).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Admin '{}' already exists",
                data.email
            )));
        }

        let created: Option<AdminUser> = self.base.db().create(TABLE).content(data).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create admin user".to_string()))
    }
}
