//! Handler for the hours reporting endpoint.
//!
//! One read-only endpoint with two presentation modes: a filtered detail
//! listing of hours entries, or a grouped summary with per-bucket totals.
//! Both modes run the same filtered query; summary mode folds the rows
//! through `tfa_core::reports`, so its totals always partition the detail
//! totals.

use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tfa_core::reports::{group_key, summarize, ReportGroup, ReportView, SummaryRow};
use tfa_db::models::report::{HoursReportRow, ReportFilter};
use tfa_db::repositories::ReportRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::api_key::ApiKey;
use crate::state::AppState;

/// Query params for `GET /reports`.
///
/// Malformed `start`/`end` values are rejected at deserialization (400)
/// rather than silently ignored; a date filter the caller tried to apply
/// must never widen the result set.
#[derive(Debug, Deserialize)]
pub struct ReportParams {
    /// Presentation mode. Defaults to `detail`.
    #[serde(default)]
    pub view: ReportView,
    /// Grouping dimension for summary mode. Defaults to `volunteer`.
    #[serde(default)]
    pub group: ReportGroup,
    /// Inclusive lower bound on the entry date.
    pub start: Option<NaiveDate>,
    /// Inclusive upper bound on the entry date.
    pub end: Option<NaiveDate>,
    /// Hours log status to report on. Defaults to `approved`.
    pub status: Option<String>,
    /// Substring filter on volunteer name or email.
    pub vq: Option<String>,
    /// Substring filter on event name.
    pub eq: Option<String>,
}

/// Response body for `view=detail`.
#[derive(Debug, Serialize)]
pub struct DetailReport {
    pub view: ReportView,
    pub rows: Vec<HoursReportRow>,
}

/// Response body for `view=summary`.
#[derive(Debug, Serialize)]
pub struct SummaryReport {
    pub view: ReportView,
    pub group: ReportGroup,
    pub rows: Vec<SummaryRow>,
}

/// GET /api/v1/reports
///
/// Filterable hours report. `view=detail` returns the joined entries;
/// `view=summary` returns total hours per volunteer, event, or month.
pub async fn hours_report(
    _gate: ApiKey,
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
) -> AppResult<Response> {
    let status = params
        .status
        .unwrap_or_else(|| tfa_core::hours::STATUS_APPROVED.to_string());
    tfa_core::hours::validate_status(&status).map_err(AppError::BadRequest)?;

    // Empty-string text filters mean "not supplied", matching how HTML
    // forms submit untouched inputs.
    let filter = ReportFilter {
        status,
        start: params.start,
        end: params.end,
        vq: params.vq.filter(|q| !q.trim().is_empty()),
        eq: params.eq.filter(|q| !q.trim().is_empty()),
    };

    let rows = ReportRepo::query_hours_entries(&state.pool, &filter).await?;

    match params.view {
        ReportView::Detail => Ok(Json(DetailReport {
            view: ReportView::Detail,
            rows,
        })
        .into_response()),
        ReportView::Summary => {
            let keyed = rows.iter().map(|r| {
                (
                    group_key(params.group, &r.volunteer_name, r.event_name.as_deref(), r.date),
                    r.hours,
                )
            });
            Ok(Json(SummaryReport {
                view: ReportView::Summary,
                group: params.group,
                rows: summarize(keyed),
            })
            .into_response())
        }
    }
}
