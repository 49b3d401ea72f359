//! Handlers for event CRUD.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tfa_core::error::CoreError;
use tfa_core::types::DbId;
use tfa_db::models::event::{CreateEvent, Event, EventListParams, UpdateEvent};
use tfa_db::models::registration::RegistrationWithVolunteer;
use tfa_db::repositories::{EventRepo, RegistrationRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::api_key::ApiKey;
use crate::response::DataResponse;
use crate::state::AppState;

/// An event detail payload: the event plus its registrations.
#[derive(Debug, Serialize)]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: Event,
    pub registrations: Vec<RegistrationWithVolunteer>,
}

/// GET /api/v1/events?status=&type=&upcoming=
///
/// List events with live registration counts, soonest first.
pub async fn list_events(
    _gate: ApiKey,
    State(state): State<AppState>,
    Query(params): Query<EventListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref status) = params.status {
        tfa_core::events::validate_status(status).map_err(AppError::BadRequest)?;
    }

    let events = EventRepo::list(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: events }))
}

/// GET /api/v1/events/{id}
///
/// Get a single event with its registrations.
pub async fn get_event(
    _gate: ApiKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let event = EventRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;

    let registrations = RegistrationRepo::list_for_event(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: EventDetail {
            event,
            registrations,
        },
    }))
}

/// POST /api/v1/events
///
/// Create an event.
pub async fn create_event(
    _gate: ApiKey,
    State(state): State<AppState>,
    Json(input): Json<CreateEvent>,
) -> AppResult<impl IntoResponse> {
    tfa_core::events::validate_name(&input.name).map_err(AppError::BadRequest)?;
    if let Some(ref status) = input.status {
        tfa_core::events::validate_status(status).map_err(AppError::BadRequest)?;
    }

    let event = EventRepo::create(&state.pool, &input).await?;

    tracing::info!(event_id = event.id, "Event created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: event })))
}

/// PUT /api/v1/events/{id}
///
/// Partially update an event.
pub async fn update_event(
    _gate: ApiKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEvent>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref status) = input.status {
        tfa_core::events::validate_status(status).map_err(AppError::BadRequest)?;
    }

    let event = EventRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Event", id }))?;

    tracing::info!(event_id = event.id, "Event updated");

    Ok(Json(DataResponse { data: event }))
}

/// DELETE /api/v1/events/{id}
///
/// Delete an event. Registrations cascade; hours logged against the event
/// survive with their event link cleared.
pub async fn delete_event(
    _gate: ApiKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = EventRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Event", id }));
    }

    tracing::info!(event_id = id, "Event deleted");

    Ok(StatusCode::NO_CONTENT)
}
