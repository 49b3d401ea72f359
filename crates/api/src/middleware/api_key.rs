//! Shared-secret API key extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tfa_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Proof that the caller presented the shared API key in the `x-api-key`
/// header.
///
/// Use this as an extractor parameter in any handler behind the gate:
///
/// ```ignore
/// async fn my_handler(_gate: ApiKey) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
///
/// The gate only authenticates the caller as "holder of the deployment
/// secret"; there is no per-user identity attached.
#[derive(Debug, Clone)]
pub struct ApiKey;

impl FromRequestParts<AppState> for ApiKey {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let key = parts
            .headers
            .get("x-api-key")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Missing x-api-key header".into()))
            })?;

        if key != state.config.api_key {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Invalid API key".into(),
            )));
        }

        Ok(ApiKey)
    }
}
