//! Route definitions for volunteers and their notes.

use axum::routing::get;
use axum::Router;

use crate::handlers::volunteers;
use crate::state::AppState;

/// Volunteer routes.
///
/// ```text
/// GET    /              -> list_volunteers (?q, status, skills)
/// POST   /              -> create_volunteer
/// GET    /{id}          -> get_volunteer
/// PUT    /{id}          -> update_volunteer
/// DELETE /{id}          -> delete_volunteer
/// GET    /{id}/notes    -> list_notes (?include_private)
/// POST   /{id}/notes    -> create_note
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(volunteers::list_volunteers).post(volunteers::create_volunteer),
        )
        .route(
            "/{id}",
            get(volunteers::get_volunteer)
                .put(volunteers::update_volunteer)
                .delete(volunteers::delete_volunteer),
        )
        .route(
            "/{id}/notes",
            get(volunteers::list_notes).post(volunteers::create_note),
        )
}
