use super::handlers::commit_order::{__path_commit_order, commit_order};
use super::handlers::create_session::{__path_create_session, create_session};
use super::handlers::delete_session::{__path_delete_session, delete_session};
use super::handlers::get_session::{__path_get_session, get_session};
use super::handlers::send_message::{__path_send_message, send_message};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_session, get_session, send_message, commit_order, delete_session))]
pub struct ConversationApiDoc;

pub fn conversation_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(&format!("{}/sessions", root_path), post(create_session))
        .route(
            &format!("{}/sessions/{{session_id}}", root_path),
            get(get_session).delete(delete_session),
        )
        .route(
            &format!("{}/sessions/{{session_id}}/messages", root_path),
            post(send_message),
        )
        .route(
            &format!("{}/sessions/{{session_id}}/commit", root_path),
            post(commit_order),
        )
}
