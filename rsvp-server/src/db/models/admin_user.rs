//! Admin User Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Admin user ID type
pub type AdminUserId = RecordId;

/// Admin account allowed into the dashboard
///
/// Seeded at startup from environment variables; there is no self-service
/// registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AdminUserId>,
    pub email: String,
    #[serde(skip_serializing)]
    pub hash_pass: String,
}

/// Create admin user payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUserCreate {
    pub email: String,
    pub hash_pass: String,
}

impl AdminUser {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.hash_pass)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_and_verify() {
        let hash = AdminUser::hash_password("boda2026!").unwrap();
        let user = AdminUser {
            id: None,
            email: "admin@boda.es".to_string(),
            hash_pass: hash,
        };

        assert!(user.verify_password("boda2026!").unwrap());
        assert!(!user.verify_password("otra").unwrap());
    }

    #[test]
    fn hash_is_never_serialized() {
        let user = AdminUser {
            id: None,
            email: "admin@boda.es".to_string(),
            hash_pass: "secret".to_string(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("hash_pass").is_none());
    }
}
