use crate::application::http::{
    conversation::router::ConversationApiDoc, order::router::OrderApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Mesero API"
    ),
    nest(
        (path = "/sessions", api = ConversationApiDoc),
        (path = "/orders", api = OrderApiDoc),
    )
)]
pub struct ApiDoc;
