//! RSVP Repository
//!
//! Append-only store for guest confirmations. Documents are written once at
//! submit time and never updated; the admin dashboard only reads.

use async_trait::async_trait;

use super::{BaseRepository, RepoError, RepoResult};
use shared::models::{RsvpRecord, StoredRsvp};
use shared::submit::{MSG_SAVE_FAILED, RsvpStore, StoreError};
use shared::admin::MSG_LOAD_FAILED;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct RsvpRepository {
    base: BaseRepository,
}

impl RsvpRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist one confirmation, returning the assigned record id
    pub async fn create(&self, record: &RsvpRecord) -> RepoResult<String> {
        let mut result = self
            .base
            .db()
            .query("CREATE rsvp CONTENT $data RETURN VALUE <string>id")
            .bind(("data", record.clone()))
            .await?;

        let ids: Vec<String> = result.take(0)?;
        ids.into_iter()
            .next()
            .ok_or_else(|| RepoError::Database("Create returned no record id".to_string()))
    }

    /// Fetch every confirmation, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<StoredRsvp>> {
        let mut result = self
            .base
            .db()
            .query("SELECT *, <string>id AS record_id FROM rsvp ORDER BY submittedAt DESC")
            .await?;

        let rows: Vec<serde_json::Value> = result.take(0)?;
        let mut records = Vec::with_capacity(rows.len());
        for mut row in rows {
            let id = {
                let obj = row.as_object_mut().ok_or_else(|| {
                    RepoError::Database("Unexpected row shape in rsvp table".to_string())
                })?;
                // Drop the raw id value; the string alias replaces it
                obj.remove("id");
                obj.remove("record_id")
                    .and_then(|v| v.as_str().map(str::to_string))
                    .ok_or_else(|| {
                        RepoError::Database("Missing record id in rsvp row".to_string())
                    })?
            };
            let record: RsvpRecord = serde_json::from_value(row).map_err(|e| {
                RepoError::Database(format!("Failed to parse rsvp document: {e}"))
            })?;
            records.push(StoredRsvp { id, record });
        }

        Ok(records)
    }
}

/// The submission workflow's persistence port, backed by the real table
///
/// Failures are logged with full detail here; callers only see the fixed
/// guest-facing messages.
#[async_trait]
impl RsvpStore for RsvpRepository {
    async fn save(&self, record: &RsvpRecord) -> Result<String, StoreError> {
        self.create(record).await.map_err(|e| {
            tracing::error!(error = %e, "RSVP write failed");
            StoreError::Write(MSG_SAVE_FAILED.to_string())
        })
    }

    async fn fetch_all(&self) -> Result<Vec<StoredRsvp>, StoreError> {
        self.find_all().await.map_err(|e| {
            tracing::error!(error = %e, "RSVP read failed");
            StoreError::Read(MSG_LOAD_FAILED.to_string())
        })
    }
}
