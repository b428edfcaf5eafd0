//! Database Module
//!
//! Embedded SurrealDB (RocksDB backend) plus table definitions.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "wedding";
const DATABASE: &str = "rsvp";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the embedded database and apply table definitions
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        define_schema(&db).await?;

        tracing::info!(path = %db_path, "Database connection established (SurrealDB RocksDB)");

        Ok(Self { db })
    }
}

/// Apply idempotent table and index definitions
///
/// `rsvp` is SCHEMALESS: the persisted document shape depends on
/// attendance, so the shape is owned by the domain types, not the schema.
/// Only the fields every document carries are pinned down.
async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
    let statements = [
        "DEFINE TABLE IF NOT EXISTS rsvp SCHEMALESS",
        "DEFINE INDEX IF NOT EXISTS rsvp_submitted_at ON rsvp FIELDS submittedAt",
        "DEFINE TABLE IF NOT EXISTS admin_user SCHEMAFULL",
        "DEFINE FIELD IF NOT EXISTS email ON admin_user TYPE string",
        "DEFINE FIELD IF NOT EXISTS hash_pass ON admin_user TYPE string",
        "DEFINE INDEX IF NOT EXISTS admin_user_email ON admin_user FIELDS email UNIQUE",
    ];

    for statement in statements {
        db.query(statement)
            .await
            .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;
    }

    Ok(())
}
