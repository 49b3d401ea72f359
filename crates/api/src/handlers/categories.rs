//! Handlers for volunteer categories.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tfa_db::models::category::{CategoryListParams, CreateCategory};
use tfa_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::api_key::ApiKey;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/categories?type=
///
/// List categories, optionally filtered by type.
pub async fn list_categories(
    _gate: ApiKey,
    State(state): State<AppState>,
    Query(params): Query<CategoryListParams>,
) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/categories
///
/// Create a category.
pub async fn create_category(
    _gate: ApiKey,
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("Name required".into()));
    }

    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(category_id = category.id, "Category created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}
