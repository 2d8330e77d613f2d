use crate::application::http::conversation::views::SessionView;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetSessionResponse {
    pub data: SessionView,
}

#[utoipa::path(
    get,
    path = "/{session_id}",
    tag = "conversation",
    summary = "Get chat session",
    description = "Returns the turn history and the extraction state of the latest assistant reply.",
    responses(
        (status = 200, body = GetSessionResponse),
        (status = 404, description = "Session not found")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
)]
pub async fn get_session(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetSessionResponse>, ApiError> {
    let session = state
        .sessions
        .get(session_id)
        .await
        .ok_or_else(|| ApiError::NotFound("Session not found".to_string()))?;

    let session = session.lock().await;

    Ok(Response::OK(GetSessionResponse {
        data: SessionView::from(&*session),
    }))
}
