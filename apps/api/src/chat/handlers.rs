//! Axum route handler for the chat API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::info;

use crate::chat::composer::{answer, ChatOutcome, ChatRequest};
use crate::errors::AppError;
use crate::state::AppState;

/// POST /chat
///
/// Always 200 once the body parses: generation failures are reported inside
/// the `ChatOutcome` payload, not through the status code.
pub async fn handle_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatOutcome>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;
    info!("Chat request ({} chars)", request.message.len());

    let outcome = answer(state.llm.as_ref(), &state.resume, &request.message).await;
    Ok(Json(outcome))
}
