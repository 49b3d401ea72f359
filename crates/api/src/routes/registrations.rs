//! Route definitions for registration updates and cancellation.
//!
//! Creation happens under `/events/{id}/register`; this router covers the
//! registration-scoped operations.

use axum::routing::put;
use axum::Router;

use crate::handlers::registrations;
use crate::state::AppState;

/// Registration routes.
///
/// ```text
/// PUT    /{id}   -> update_registration
/// DELETE /{id}   -> cancel_registration
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        put(registrations::update_registration).delete(registrations::cancel_registration),
    )
}
