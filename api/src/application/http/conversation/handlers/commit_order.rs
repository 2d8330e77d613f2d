use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use mesero_core::domain::order::entities::Order;
use mesero_core::domain::order::ports::OrderService;
use mesero_core::domain::order::value_objects::CommitOrderInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CommitOrderResponse {
    pub data: Order,
}

#[utoipa::path(
    post,
    path = "/{session_id}/commit",
    tag = "conversation",
    summary = "Save the order from a chat session",
    description = "Stores the order found in the latest assistant reply and clears the session history.",
    responses(
        (status = 201, body = CommitOrderResponse),
        (status = 404, description = "Session not found"),
        (status = 422, description = "The latest reply holds no valid order")
    ),
    params(
        ("session_id" = Uuid, Path, description = "Session ID"),
    ),
)]
pub async fn commit_order(
    Path(session_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<CommitOrderResponse>, ApiError> {
    let session = state
        .sessions
        .get(session_id)
        .await
        .ok_or_else(|| ApiError::NotFound("Session not found".to_string()))?;

    let mut session = session.lock().await;

    let model_text = session
        .latest_model_turn()
        .map(|turn| turn.text.clone())
        .ok_or_else(|| {
            ApiError::UnprocessableEntity("No assistant reply to save yet".to_string())
        })?;

    let order = state
        .service
        .commit_order(CommitOrderInput { model_text })
        .await
        .map_err(ApiError::from)?;

    session.clear();

    Ok(Response::Created(CommitOrderResponse { data: order }))
}
