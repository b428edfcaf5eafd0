//! Submission Workflow
//!
//! Orchestrates validate → map → persist for one form session over an
//! injected [`RsvpStore`] port. Failures are terminal for the attempt:
//! there is no automatic retry, the user resubmits explicitly.

use async_trait::async_trait;
use thiserror::Error;

use crate::mapper::prepare_record;
use crate::models::{RsvpForm, RsvpRecord, StoredRsvp};
use crate::util::now_millis;
use crate::validate::validate;

/// Fallback shown when a write failure carries no message of its own
pub const MSG_SAVE_FAILED: &str =
    "No se pudo guardar la confirmación. Por favor, inténtalo de nuevo.";

/// Persistence failure, as surfaced to the user
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Write(String),

    #[error("{0}")]
    Read(String),
}

/// Persistence port for the `rsvps` collection
///
/// Append-only: one write per submission, bulk reads ordered by submission
/// time descending. The server backs this with its repository; tests use
/// an in-memory fake.
#[async_trait]
pub trait RsvpStore: Send + Sync {
    /// Persist one record, returning the store-assigned document id
    async fn save(&self, record: &RsvpRecord) -> Result<String, StoreError>;

    /// Fetch every record, newest first
    async fn fetch_all(&self) -> Result<Vec<StoredRsvp>, StoreError>;
}

/// One RSVP form session: the mutable form plus submit-progress state
///
/// States: idle → validating → submitting → succeeded | failed. A failed
/// validation or write returns to submit-ready with the error text
/// retained; only a successful persist resets the form.
#[derive(Debug, Default)]
pub struct FormSession {
    pub form: RsvpForm,
    /// True while a write is in flight; disables the submit control
    pub submitting: bool,
    /// Display string for the last failure, cleared on the next submit
    pub error: Option<String>,
    /// True once a submission has been persisted (confirmation view)
    pub confirmed: bool,
}

impl FormSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one submit attempt; returns true on success
    ///
    /// On success the form is reset to defaults and `confirmed` is set.
    /// On failure the form is kept as typed so the user can resubmit.
    pub async fn submit<S: RsvpStore + ?Sized>(&mut self, store: &S, user_agent: &str) -> bool {
        if self.submitting {
            return false;
        }
        self.error = None;

        let errors = validate(&self.form);
        if !errors.is_empty() {
            self.error = Some(errors.join(", "));
            return false;
        }

        self.submitting = true;
        let record = prepare_record(&self.form, now_millis(), user_agent);
        let result = store.save(&record).await;
        self.submitting = false;

        match result {
            Ok(id) => {
                tracing::info!(record_id = %id, "RSVP persisted");
                self.form = RsvpForm::default();
                self.confirmed = true;
                true
            }
            Err(e) => {
                let message = e.to_string();
                tracing::warn!(error = %message, "RSVP submit failed");
                self.error = Some(if message.is_empty() {
                    MSG_SAVE_FAILED.to_string()
                } else {
                    message
                });
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::MSG_NAME_REQUIRED;
    use std::sync::Mutex;

    /// In-memory store fake: appends records, optionally failing writes
    #[derive(Default)]
    struct MemoryStore {
        records: Mutex<Vec<StoredRsvp>>,
        fail_writes: bool,
    }

    #[async_trait]
    impl RsvpStore for MemoryStore {
        async fn save(&self, record: &RsvpRecord) -> Result<String, StoreError> {
            if self.fail_writes {
                return Err(StoreError::Write(String::new()));
            }
            let mut records = self.records.lock().unwrap();
            let id = format!("rsvp:{}", records.len() + 1);
            records.push(StoredRsvp {
                id: id.clone(),
                record: record.clone(),
            });
            Ok(id)
        }

        async fn fetch_all(&self) -> Result<Vec<StoredRsvp>, StoreError> {
            let mut records = self.records.lock().unwrap().clone();
            records.sort_by_key(|r| std::cmp::Reverse(r.record.submitted_at()));
            Ok(records)
        }
    }

    fn filled_session() -> FormSession {
        let mut session = FormSession::new();
        session.form.name = "Ana".to_string();
        session.form.last_name = "Ruiz".to_string();
        session
    }

    #[tokio::test]
    async fn successful_submit_resets_form_and_confirms() {
        let store = MemoryStore::default();
        let mut session = filled_session();

        assert!(session.submit(&store, "test-agent").await);
        assert!(session.confirmed);
        assert!(session.error.is_none());
        assert!(!session.submitting);
        assert_eq!(session.form, RsvpForm::default());
        assert_eq!(store.records.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn validation_failure_skips_persistence() {
        let store = MemoryStore::default();
        let mut session = FormSession::new();

        assert!(!session.submit(&store, "test-agent").await);
        let error = session.error.as_deref().unwrap();
        assert!(error.contains(MSG_NAME_REQUIRED));
        assert!(store.records.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn write_failure_keeps_form_for_resubmit() {
        let store = MemoryStore {
            fail_writes: true,
            ..MemoryStore::default()
        };
        let mut session = filled_session();

        assert!(!session.submit(&store, "test-agent").await);
        assert_eq!(session.error.as_deref(), Some(MSG_SAVE_FAILED));
        assert!(!session.confirmed);
        assert_eq!(session.form.name, "Ana");

        // Explicit resubmit against a healthy store succeeds
        let healthy = MemoryStore::default();
        assert!(session.submit(&healthy, "test-agent").await);
    }

    #[tokio::test]
    async fn submit_clears_previous_error() {
        let store = MemoryStore::default();
        let mut session = filled_session();
        session.error = Some("anterior".to_string());

        assert!(session.submit(&store, "test-agent").await);
        assert!(session.error.is_none());
    }
}
