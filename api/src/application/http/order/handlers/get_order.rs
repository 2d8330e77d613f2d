use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use mesero_core::domain::order::entities::Order;
use mesero_core::domain::order::ports::OrderService;
use mesero_core::domain::order::value_objects::GetOrderInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetOrderResponse {
    pub data: Order,
}

#[utoipa::path(
    get,
    path = "/{order_id}",
    tag = "order",
    summary = "Get order",
    responses(
        (status = 200, body = GetOrderResponse),
        (status = 404, description = "Order not found")
    ),
    params(
        ("order_id" = Uuid, Path, description = "Order ID"),
    ),
)]
pub async fn get_order(
    Path(order_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Response<GetOrderResponse>, ApiError> {
    let order = state
        .service
        .get_order(GetOrderInput { order_id })
        .await
        .map_err(ApiError::from)?
        .ok_or_else(|| ApiError::NotFound("Order not found".to_string()))?;

    Ok(Response::OK(GetOrderResponse { data: order }))
}
