use crate::application::http::server::api_entities::api_error::ApiError;
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use mesero_core::domain::order::entities::Order;
use mesero_core::domain::order::ports::OrderService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetOrdersResponse {
    pub data: Vec<Order>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "order",
    summary = "List orders",
    description = "Retrieves every stored order, oldest first.",
    responses(
        (status = 200, body = GetOrdersResponse)
    ),
)]
pub async fn get_orders(
    State(state): State<AppState>,
) -> Result<Response<GetOrdersResponse>, ApiError> {
    let orders = state.service.get_orders().await.map_err(ApiError::from)?;

    Ok(Response::OK(GetOrdersResponse { data: orders }))
}
