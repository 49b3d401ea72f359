//! Handlers for event registrations.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tfa_core::error::CoreError;
use tfa_core::types::DbId;
use tfa_db::models::registration::{CreateRegistration, UpdateRegistration};
use tfa_db::repositories::{EventRepo, RegistrationRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::api_key::ApiKey;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/events/{id}/register
///
/// Register a volunteer for an event. Full events answer 400; a repeat
/// registration answers 409 via the unique constraint.
pub async fn register_volunteer(
    _gate: ApiKey,
    State(state): State<AppState>,
    Path(event_id): Path<DbId>,
    Json(input): Json<CreateRegistration>,
) -> AppResult<impl IntoResponse> {
    let event = EventRepo::find_by_id(&state.pool, event_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Event",
            id: event_id,
        }))?;

    if let Some(capacity) = event.capacity {
        let registered = RegistrationRepo::count_for_event(&state.pool, event_id).await?;
        if registered >= i64::from(capacity) {
            return Err(AppError::BadRequest("Event is at full capacity".into()));
        }
    }

    let registration = RegistrationRepo::create(
        &state.pool,
        event_id,
        input.volunteer_id,
        input.notes.as_deref(),
    )
    .await?;

    tracing::info!(
        registration_id = registration.id,
        event_id,
        volunteer_id = input.volunteer_id,
        "Volunteer registered for event"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse { data: registration }),
    ))
}

/// PUT /api/v1/registrations/{id}
///
/// Update a registration's status (confirm, mark attended, etc.).
pub async fn update_registration(
    _gate: ApiKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateRegistration>,
) -> AppResult<impl IntoResponse> {
    tfa_core::registrations::validate_status(&input.status).map_err(AppError::BadRequest)?;

    let registration = RegistrationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Registration",
            id,
        }))?;

    tracing::info!(
        registration_id = registration.id,
        status = %registration.status,
        "Registration updated"
    );

    Ok(Json(DataResponse { data: registration }))
}

/// DELETE /api/v1/registrations/{id}
///
/// Cancel a registration.
pub async fn cancel_registration(
    _gate: ApiKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = RegistrationRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Registration",
            id,
        }));
    }

    tracing::info!(registration_id = id, "Registration cancelled");

    Ok(StatusCode::NO_CONTENT)
}
