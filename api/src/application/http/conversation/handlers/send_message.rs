use crate::application::http::conversation::validators::SendMessageValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use mesero_core::domain::conversation::ports::ConversationService;
use mesero_core::domain::conversation::value_objects::RespondInput;
use mesero_core::domain::extraction::{Extraction, inspect};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MessageExchange {
    /// Assistant reply, verbatim.
    pub reply: String,
    pub extraction: Extraction,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SendMessageResponse {
    pub data: MessageExchange,
}

#[utoipa::path(
    post,
    path = "/{session_id}/messages",
    tag = "conversation",
    summary = "Send a chat message",
    description = "Records the message, asks the assistant for a reply and reports whether the reply holds a complete order.",
    responses(
        (status = 200, body = SendMessageResponse),
        (status = 404, description = "Session not found"),
        (status = 502, description = "Assistant call failed; the message stays recorded")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
    request_body = SendMessageValidator
)]
pub async fn send_message(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<SendMessageValidator>,
) -> Result<Response<SendMessageResponse>, ApiError> {
    let session = state
        .sessions
        .get(session_id)
        .await
        .ok_or_else(|| ApiError::NotFound("Session not found".to_string()))?;

    let mut session = session.lock().await;

    let history = session.turns().to_vec();
    session.record_user(payload.message.clone());

    let reply = state
        .service
        .respond(RespondInput {
            history,
            user_message: payload.message,
        })
        .await
        .map_err(ApiError::from)?;

    session.record_model(reply.clone());

    let extraction = inspect(&reply);
    tracing::debug!(%session_id, candidate = extraction.is_candidate(), "assistant replied");

    Ok(Response::OK(SendMessageResponse {
        data: MessageExchange { reply, extraction },
    }))
}
