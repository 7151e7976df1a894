use axum::Json;
use axum::extract::State;
use rolegate_application::CommandError;
use rolegate_domain::command_suggestions;

use crate::dto::{CommandRequest, CommandResponse, InterpretedCommandResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn execute_command_handler(
    State(state): State<AppState>,
    Json(payload): Json<CommandRequest>,
) -> ApiResult<Json<CommandResponse>> {
    let success = state
        .command_service
        .execute(payload.command.as_str())
        .await?;

    Ok(Json(CommandResponse::from(success)))
}

pub async fn interpret_command_handler(
    State(state): State<AppState>,
    Json(payload): Json<CommandRequest>,
) -> ApiResult<Json<InterpretedCommandResponse>> {
    let intent = state
        .command_service
        .interpret(payload.command.as_str())
        .ok_or(CommandError::NotUnderstood)?;

    Ok(Json(InterpretedCommandResponse::from(intent)))
}

pub async fn command_suggestions_handler() -> Json<Vec<String>> {
    Json(
        command_suggestions()
            .iter()
            .map(|suggestion| (*suggestion).to_owned())
            .collect(),
    )
}
