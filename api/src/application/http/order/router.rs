use super::handlers::create_order::{__path_create_order, create_order};
use super::handlers::delete_order::{__path_delete_order, delete_order};
use super::handlers::get_order::{__path_get_order, get_order};
use super::handlers::get_orders::{__path_get_orders, get_orders};
use super::handlers::update_order::{__path_update_order, update_order};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_orders, get_order, create_order, update_order, delete_order))]
pub struct OrderApiDoc;

pub fn order_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{}/orders", root_path),
            get(get_orders).post(create_order),
        )
        .route(
            &format!("{}/orders/{{order_id}}", root_path),
            get(get_order).put(update_order).delete(delete_order),
        )
}
