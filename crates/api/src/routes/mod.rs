pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod events;
pub mod health;
pub mod hours_logs;
pub mod registrations;
pub mod reports;
pub mod volunteers;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Every route below requires the shared API key via the `ApiKey` extractor
/// on its handler. Route hierarchy:
///
/// ```text
/// /auth/login                  login (POST)
/// /auth/register               volunteer self-registration (POST)
///
/// /volunteers                  list, create
/// /volunteers/{id}             get, update, delete
/// /volunteers/{id}/notes       list, create
///
/// /events                      list, create
/// /events/{id}                 get, update, delete
/// /events/{id}/register        register volunteer (POST)
///
/// /registrations/{id}          update, cancel (PUT, DELETE)
///
/// /logs                        list, create
/// /logs/{id}                   update, delete
///
/// /categories                  list, create
///
/// /reports                     hours report, detail or summary (GET)
///
/// /dashboard/stats             headline counts (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Account verification (login, self-registration).
        .nest("/auth", auth::router())
        // Volunteer profiles and their notes.
        .nest("/volunteers", volunteers::router())
        // Events, including per-event registration.
        .nest("/events", events::router())
        // Registration status changes and cancellation.
        .nest("/registrations", registrations::router())
        // Hours logs (creation and approval workflow).
        .nest("/logs", hours_logs::router())
        // Volunteer categories.
        .nest("/categories", categories::router())
        // Hours reporting (detail and summary views).
        .nest("/reports", reports::router())
        // Admin dashboard counters.
        .nest("/dashboard", dashboard::router())
}
