//! Axum route handlers for cheer generation.

use axum::{extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::models::cheer::{CheerRequestBody, GenerationResult, UserRequest};
use crate::state::AppState;

/// POST /data/
///
/// Validates the fan's request and runs the retrieval-augmented generation
/// pipeline. Responds with the five generated messages as a JSON array.
pub async fn handle_generate_cheers(
    State(state): State<AppState>,
    Json(body): Json<CheerRequestBody>,
) -> Result<Json<GenerationResult>, AppError> {
    let request = validate_body(body)?;

    info!(
        "Cheer request: player={}, expected_score={}, attitude={}, feeling={}",
        request.player_name, request.expected_score, request.attitude, request.feeling
    );

    let messages = state.pipeline.run(&request).await?;

    Ok(Json(messages))
}

/// Every field is required and must contain something other than whitespace.
fn validate_body(body: CheerRequestBody) -> Result<UserRequest, AppError> {
    let mut missing = Vec::new();
    let mut require = |value: Option<String>, field: &'static str| match value {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => {
            missing.push(field);
            String::new()
        }
    };

    let request = UserRequest {
        player_name: require(body.player_name, "player_name"),
        expected_score: require(body.expected_score, "expected_score"),
        attitude: require(body.attitude, "attitude"),
        feeling: require(body.feeling, "feeling"),
    };

    if !missing.is_empty() {
        return Err(AppError::Validation(format!(
            "missing or blank fields: {}",
            missing.join(", ")
        )));
    }

    Ok(request)
}
