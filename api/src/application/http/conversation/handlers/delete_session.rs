use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteSessionResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{session_id}",
    tag = "conversation",
    summary = "End a chat session",
    description = "Discards the session and its turn history.",
    responses(
        (status = 200, body = DeleteSessionResponse),
        (status = 404, description = "Session not found")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
)]
pub async fn delete_session(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteSessionResponse>, ApiError> {
    if !state.sessions.close(session_id).await {
        return Err(ApiError::NotFound("Session not found".to_string()));
    }

    Ok(Response::OK(DeleteSessionResponse {
        message: "Session closed".to_string(),
    }))
}
