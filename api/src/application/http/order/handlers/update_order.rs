use crate::application::http::order::validators::UpdateOrderValidator;
use crate::application::http::server::api_entities::api_error::{ApiError, ValidateJson};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use mesero_core::domain::order::entities::Order;
use mesero_core::domain::order::ports::OrderService;
use mesero_core::domain::order::value_objects::{GetOrderInput, UpdateOrderInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UpdateOrderResponse {
    /// The order after the update; `null` when no order has this id.
    pub data: Option<Order>,
}

#[utoipa::path(
    put,
    path = "/{order_id}",
    tag = "order",
    summary = "Update order",
    description = "Merges the given fields into the stored order. Unknown ids are ignored.",
    responses(
        (status = 200, body = UpdateOrderResponse)
    ),
    params(
        ("order_id" = Uuid, Path, description = "Order ID"),
    ),
    request_body = UpdateOrderValidator
)]
pub async fn update_order(
    Path(order_id): Path<Uuid>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateOrderValidator>,
) -> Result<Response<UpdateOrderResponse>, ApiError> {
    state
        .service
        .update_order(UpdateOrderInput {
            order_id,
            patch: payload.into(),
        })
        .await
        .map_err(ApiError::from)?;

    let order = state
        .service
        .get_order(GetOrderInput { order_id })
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(UpdateOrderResponse { data: order }))
}
