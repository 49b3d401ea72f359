//! Handlers for login and volunteer self-registration.
//!
//! Authentication here is account verification only; API access itself is
//! gated by the shared key in [`crate::middleware::api_key`]. There are no
//! sessions or tokens.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tfa_core::error::CoreError;
use tfa_core::volunteers::normalize_email;
use tfa_db::models::user::{LoginRequest, RegisterRequest, User};
use tfa_db::models::volunteer::Volunteer;
use tfa_db::repositories::{UserRepo, VolunteerRepo};

use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::api_key::ApiKey;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response body for a successful registration.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user: User,
    pub volunteer: Volunteer,
}

/// POST /api/v1/auth/login
///
/// Verify an email/password pair. Unknown accounts and wrong passwords both
/// answer 401 without distinguishing which check failed.
pub async fn login(
    _gate: ApiKey,
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    if input.email.trim().is_empty() || input.password.is_empty() {
        return Err(AppError::BadRequest("Email and password required".into()));
    }

    let email = normalize_email(&input.email);
    let credentials = UserRepo::find_credentials_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid credentials".into())))?;

    if !credentials.is_active {
        return Err(AppError::Core(CoreError::Forbidden(
            "Account is inactive".into(),
        )));
    }

    let verified = verify_password(&input.password, &credentials.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {e}")))?;
    if !verified {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    UserRepo::touch_last_login(&state.pool, credentials.id).await?;

    let user = UserRepo::find_by_id(&state.pool, credentials.id)
        .await?
        .ok_or_else(|| AppError::InternalError("User vanished after login".into()))?;

    tracing::info!(user_id = user.id, "Login successful");

    Ok(Json(DataResponse { data: user }))
}

/// POST /api/v1/auth/register
///
/// Create a volunteer account: one user row and its volunteer profile, in a
/// single transaction. Duplicate emails answer 409 via the unique
/// constraints.
pub async fn register(
    _gate: ApiKey,
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    tfa_core::volunteers::validate_identity(&input.name, &input.email)
        .map_err(AppError::BadRequest)?;
    validate_password_strength(&input.password).map_err(AppError::BadRequest)?;

    let email = normalize_email(&input.email);
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let mut tx = state.pool.begin().await?;
    let user = UserRepo::create(&mut *tx, &email, &password_hash, "volunteer").await?;
    let volunteer = VolunteerRepo::create_for_user(
        &mut *tx,
        user.id,
        input.name.trim(),
        &email,
        input.phone.as_deref(),
    )
    .await?;
    tx.commit().await?;

    tracing::info!(
        user_id = user.id,
        volunteer_id = volunteer.id,
        "Volunteer account registered"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: RegisterResponse { user, volunteer },
        }),
    ))
}
