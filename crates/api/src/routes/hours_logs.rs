//! Route definitions for hours logs.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::hours_logs;
use crate::state::AppState;

/// Hours log routes.
///
/// ```text
/// GET    /       -> list_hours_logs (?volunteer_id, event_id, status, start_date, end_date)
/// POST   /       -> create_hours_log
/// PUT    /{id}   -> update_hours_log
/// DELETE /{id}   -> delete_hours_log
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(hours_logs::list_hours_logs).post(hours_logs::create_hours_log),
        )
        .route(
            "/{id}",
            put(hours_logs::update_hours_log).delete(hours_logs::delete_hours_log),
        )
}
