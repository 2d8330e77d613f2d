use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::http::order::validators::not_blank;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct SendMessageValidator {
    #[validate(
        length(max = 4000, message = "message must be at most 4000 characters"),
        custom(function = "not_blank", message = "message must not be empty")
    )]
    pub message: String,
}
