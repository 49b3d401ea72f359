//! Route definitions for the hours report.

use axum::routing::get;
use axum::Router;

use crate::handlers::reports;
use crate::state::AppState;

/// Report routes.
///
/// ```text
/// GET /   -> hours_report (?view, group, start, end, status, vq, eq)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(reports::hours_report))
}
