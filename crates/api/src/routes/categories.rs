//! Route definitions for categories.

use axum::routing::get;
use axum::Router;

use crate::handlers::categories;
use crate::state::AppState;

/// Category routes.
///
/// ```text
/// GET  /   -> list_categories (?type)
/// POST /   -> create_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(categories::list_categories).post(categories::create_category),
    )
}
