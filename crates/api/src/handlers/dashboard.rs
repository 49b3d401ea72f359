//! Handler for the admin dashboard statistics.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use tfa_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::middleware::api_key::ApiKey;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/dashboard/stats
///
/// Headline counts: volunteers, events, hours, registrations.
pub async fn stats(
    _gate: ApiKey,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let stats = DashboardRepo::stats(&state.pool).await?;
    Ok(Json(DataResponse { data: stats }))
}
