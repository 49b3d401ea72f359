//! Route definitions for events.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{events, registrations};
use crate::state::AppState;

/// Event routes.
///
/// ```text
/// GET    /                -> list_events (?status, type, upcoming)
/// POST   /                -> create_event
/// GET    /{id}            -> get_event
/// PUT    /{id}            -> update_event
/// DELETE /{id}            -> delete_event
/// POST   /{id}/register   -> register_volunteer
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(events::list_events).post(events::create_event))
        .route(
            "/{id}",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
        .route("/{id}/register", post(registrations::register_volunteer))
}
