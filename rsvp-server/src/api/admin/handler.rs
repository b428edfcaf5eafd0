//! Admin Dashboard Handlers
//!
//! Read-only views over the confirmation table: filtered listing with
//! statistics, and CSV export of the current view.

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::{AppError, AppResult};
use shared::admin::{
    AttendanceFilter, Statistics, export_filename, filter, search, statistics, to_csv,
};
use shared::models::StoredRsvp;

/// Listing query: attendance filter plus free-text name search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub filter: AttendanceFilter,
    #[serde(default)]
    pub search: String,
}

/// Listing response
///
/// `stats` always covers the whole table; only `records` narrows to the
/// requested view.
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub records: Vec<StoredRsvp>,
    pub stats: Statistics,
}

async fn fetch_view(
    state: &ServerState,
    query: &ListQuery,
) -> AppResult<(Vec<StoredRsvp>, Vec<StoredRsvp>)> {
    let all = state
        .rsvp_repository()
        .find_all()
        .await
        .map_err(|e| AppError::load_failed(e.to_string()))?;

    let view = search(&filter(&all, query.filter), &query.search);
    Ok((all, view))
}

/// List confirmations, newest first
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ListResponse>> {
    let (all, records) = fetch_view(&state, &query).await?;
    let stats = statistics(&all);

    Ok(Json(ListResponse { records, stats }))
}

/// Export the current view as CSV
///
/// The export honors the same filter and search as the listing, so what the
/// admin sees is what lands in the file.
pub async fn export(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Response> {
    let (_, records) = fetch_view(&state, &query).await?;
    let csv = to_csv(&records);
    let filename = export_filename(chrono::Utc::now().date_naive());

    tracing::info!(rows = records.len(), filename = %filename, "CSV export");

    let headers = [
        (
            http::header::CONTENT_TYPE,
            "text/csv; charset=utf-8".to_string(),
        ),
        (
            http::header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];

    Ok((headers, csv).into_response())
}
