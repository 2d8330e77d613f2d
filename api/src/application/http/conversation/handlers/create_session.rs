use crate::application::http::conversation::views::SessionView;
use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateSessionResponse {
    pub data: SessionView,
}

#[utoipa::path(
    post,
    path = "",
    tag = "conversation",
    summary = "Start a chat session",
    responses(
        (status = 201, body = CreateSessionResponse)
    ),
)]
pub async fn create_session(
    State(state): State<AppState>,
) -> Result<Response<CreateSessionResponse>, ApiError> {
    let session = state.sessions.open().await;

    Ok(Response::Created(CreateSessionResponse {
        data: SessionView::from(&session),
    }))
}
