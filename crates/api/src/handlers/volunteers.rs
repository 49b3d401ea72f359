//! Handlers for volunteer CRUD and the per-volunteer notes sub-resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tfa_core::error::CoreError;
use tfa_core::types::DbId;
use tfa_db::models::category::Category;
use tfa_db::models::volunteer::{
    CreateVolunteer, UpdateVolunteer, VolunteerListParams, VolunteerWithStats,
};
use tfa_db::models::volunteer_note::{CreateVolunteerNote, VolunteerNoteListParams};
use tfa_db::repositories::{CategoryRepo, VolunteerNoteRepo, VolunteerRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::api_key::ApiKey;
use crate::response::DataResponse;
use crate::state::AppState;

/// A volunteer detail payload: profile, aggregates, and category tags.
#[derive(Debug, Serialize)]
pub struct VolunteerDetail {
    #[serde(flatten)]
    pub volunteer: VolunteerWithStats,
    pub categories: Vec<Category>,
}

/// GET /api/v1/volunteers?q=&status=&skills=
///
/// List volunteers with approved-hours aggregates.
pub async fn list_volunteers(
    _gate: ApiKey,
    State(state): State<AppState>,
    Query(params): Query<VolunteerListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref status) = params.status {
        tfa_core::volunteers::validate_status(status).map_err(AppError::BadRequest)?;
    }

    let volunteers = VolunteerRepo::list(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: volunteers }))
}

/// GET /api/v1/volunteers/{id}
///
/// Get a single volunteer with aggregates and assigned categories.
pub async fn get_volunteer(
    _gate: ApiKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let volunteer = VolunteerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Volunteer",
            id,
        }))?;

    let categories = CategoryRepo::list_for_volunteer(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: VolunteerDetail {
            volunteer,
            categories,
        },
    }))
}

/// POST /api/v1/volunteers
///
/// Create a volunteer profile.
pub async fn create_volunteer(
    _gate: ApiKey,
    State(state): State<AppState>,
    Json(input): Json<CreateVolunteer>,
) -> AppResult<impl IntoResponse> {
    tfa_core::volunteers::validate_identity(&input.name, &input.email)
        .map_err(AppError::BadRequest)?;
    if let Some(ref status) = input.status {
        tfa_core::volunteers::validate_status(status).map_err(AppError::BadRequest)?;
    }

    let volunteer = VolunteerRepo::create(&state.pool, &input).await?;

    tracing::info!(volunteer_id = volunteer.id, "Volunteer created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: volunteer })))
}

/// PUT /api/v1/volunteers/{id}
///
/// Partially update a volunteer.
pub async fn update_volunteer(
    _gate: ApiKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVolunteer>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref status) = input.status {
        tfa_core::volunteers::validate_status(status).map_err(AppError::BadRequest)?;
    }

    let volunteer = VolunteerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Volunteer",
            id,
        }))?;

    tracing::info!(volunteer_id = volunteer.id, "Volunteer updated");

    Ok(Json(DataResponse { data: volunteer }))
}

/// DELETE /api/v1/volunteers/{id}
///
/// Delete a volunteer and (via cascades) their registrations, hours logs,
/// and notes.
pub async fn delete_volunteer(
    _gate: ApiKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = VolunteerRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Volunteer",
            id,
        }));
    }

    tracing::info!(volunteer_id = id, "Volunteer deleted");

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Notes sub-resource
// ---------------------------------------------------------------------------

/// GET /api/v1/volunteers/{id}/notes?include_private=
///
/// List a volunteer's notes. Private notes are hidden by default.
pub async fn list_notes(
    _gate: ApiKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<VolunteerNoteListParams>,
) -> AppResult<impl IntoResponse> {
    let notes =
        VolunteerNoteRepo::list_for_volunteer(&state.pool, id, params.include_private).await?;
    Ok(Json(DataResponse { data: notes }))
}

/// POST /api/v1/volunteers/{id}/notes
///
/// Attach a note to a volunteer.
pub async fn create_note(
    _gate: ApiKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateVolunteerNote>,
) -> AppResult<impl IntoResponse> {
    if input.note.trim().is_empty() {
        return Err(AppError::BadRequest("Note content required".into()));
    }

    // Reject unknown volunteers up front so the FK error surface stays 404,
    // not a generic constraint failure.
    VolunteerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Volunteer",
            id,
        }))?;

    let note = VolunteerNoteRepo::create(&state.pool, id, &input).await?;

    tracing::info!(volunteer_id = id, note_id = note.id, "Volunteer note created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: note })))
}
