//! RSVP Submission Handler
//!
//! Public endpoint: validate the submitted form, map it to the persisted
//! record and append it. The submission timestamp and user agent are taken
//! here, never from the client payload.

use axum::{Json, extract::State, http::HeaderMap};
use serde::Serialize;

use crate::core::ServerState;
use crate::{AppError, AppResult};
use shared::mapper::prepare_record;
use shared::models::RsvpForm;
use shared::util::now_millis;
use shared::validate::validate;

/// Response for a persisted confirmation
#[derive(Debug, Clone, Serialize)]
pub struct SubmitResponse {
    pub id: String,
}

/// Submit one confirmation
pub async fn submit(
    State(state): State<ServerState>,
    headers: HeaderMap,
    Json(form): Json<RsvpForm>,
) -> AppResult<Json<SubmitResponse>> {
    let errors = validate(&form);
    if !errors.is_empty() {
        return Err(AppError::validation(errors.join(", ")));
    }

    let user_agent = headers
        .get(http::header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    let record = prepare_record(&form, now_millis(), user_agent);

    let id = state
        .rsvp_repository()
        .create(&record)
        .await
        .map_err(|e| AppError::save_failed(e.to_string()))?;

    tracing::info!(
        record_id = %id,
        will_attend = record.will_attend(),
        "RSVP persisted"
    );

    Ok(Json(SubmitResponse { id }))
}
