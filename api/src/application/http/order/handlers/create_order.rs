use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use mesero_core::domain::order::entities::{Order, OrderDraft};
use mesero_core::domain::order::ports::OrderService;
use mesero_core::domain::order::value_objects::CreateOrderInput;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateOrderResponse {
    pub data: Order,
}

#[utoipa::path(
    post,
    path = "",
    tag = "order",
    summary = "Create order",
    description = "Stores an order document directly, without going through a conversation.",
    responses(
        (status = 201, body = CreateOrderResponse)
    ),
    request_body = OrderDraft
)]
pub async fn create_order(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<OrderDraft>,
) -> Result<Response<CreateOrderResponse>, ApiError> {
    let order = state
        .service
        .create_order(CreateOrderInput { draft: payload })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateOrderResponse { data: order }))
}
