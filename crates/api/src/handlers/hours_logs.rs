//! Handlers for hours log CRUD.
//!
//! Creation and approval happen here; the reporting endpoint only reads the
//! resulting state.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tfa_core::error::CoreError;
use tfa_core::types::DbId;
use tfa_db::models::hours_log::{CreateHoursLog, HoursLogListParams, UpdateHoursLog};
use tfa_db::repositories::HoursLogRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::api_key::ApiKey;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/logs?volunteer_id=&event_id=&status=&start_date=&end_date=
///
/// List hours logs with volunteer, event, and approver identity.
pub async fn list_hours_logs(
    _gate: ApiKey,
    State(state): State<AppState>,
    Query(params): Query<HoursLogListParams>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref status) = params.status {
        tfa_core::hours::validate_status(status).map_err(AppError::BadRequest)?;
    }

    let logs = HoursLogRepo::list(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: logs }))
}

/// POST /api/v1/logs
///
/// Record volunteered hours. New logs default to `pending`.
pub async fn create_hours_log(
    _gate: ApiKey,
    State(state): State<AppState>,
    Json(input): Json<CreateHoursLog>,
) -> AppResult<impl IntoResponse> {
    tfa_core::hours::validate_hours(input.hours).map_err(AppError::BadRequest)?;
    if let Some(ref status) = input.status {
        tfa_core::hours::validate_status(status).map_err(AppError::BadRequest)?;
    }

    let log = HoursLogRepo::create(&state.pool, &input).await?;

    tracing::info!(
        log_id = log.id,
        volunteer_id = log.volunteer_id,
        hours = log.hours,
        "Hours log created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: log })))
}

/// PUT /api/v1/logs/{id}
///
/// Partially update an hours log. Approving with an `approved_by` user
/// stamps the approval fields.
pub async fn update_hours_log(
    _gate: ApiKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateHoursLog>,
) -> AppResult<impl IntoResponse> {
    if let Some(hours) = input.hours {
        tfa_core::hours::validate_hours(hours).map_err(AppError::BadRequest)?;
    }
    if let Some(ref status) = input.status {
        tfa_core::hours::validate_status(status).map_err(AppError::BadRequest)?;
    }

    let log = HoursLogRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "HoursLog",
            id,
        }))?;

    tracing::info!(log_id = log.id, status = %log.status, "Hours log updated");

    Ok(Json(DataResponse { data: log }))
}

/// DELETE /api/v1/logs/{id}
///
/// Delete an hours log.
pub async fn delete_hours_log(
    _gate: ApiKey,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = HoursLogRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "HoursLog",
            id,
        }));
    }

    tracing::info!(log_id = id, "Hours log deleted");

    Ok(StatusCode::NO_CONTENT)
}
