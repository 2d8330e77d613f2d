use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use mesero_core::domain::order::ports::OrderService;
use mesero_core::domain::order::value_objects::DeleteOrderInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteOrderResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{order_id}",
    tag = "order",
    summary = "Delete order",
    description = "Removes the order. Deleting an unknown id succeeds.",
    responses(
        (status = 200, body = DeleteOrderResponse)
    ),
    params(
        ("order_id" = Uuid, Path, description = "Order ID"),
    ),
)]
pub async fn delete_order(
    Path(order_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<DeleteOrderResponse>, ApiError> {
    state
        .service
        .delete_order(DeleteOrderInput { order_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteOrderResponse {
        message: "Order deleted successfully".to_string(),
    }))
}
