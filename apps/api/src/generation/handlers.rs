//! Axum route handlers for the caption generation API.

use axum::{extract::State, http::StatusCode, Json};

use crate::errors::AppError;
use crate::generation::generator::{generate_captions, GenerationRequest, GenerationResult};
use crate::state::AppState;

/// POST /api/generate
///
/// Validates the request strictly, then runs the full generation cycle.
/// A generator failure still returns the uniform failure body, with 502.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerationRequest>,
) -> Result<(StatusCode, Json<GenerationResult>), AppError> {
    request.validate()?;

    let result =
        generate_captions(state.generator.as_ref(), &state.generation_log, &request).await?;

    let status = if result.is_success() {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };

    Ok((status, Json(result)))
}
