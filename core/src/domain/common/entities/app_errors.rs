use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("No order found in the conversation yet")]
    IncompleteOrder,

    #[error("Detected order JSON is malformed: {0}")]
    MalformedOrder(String),

    #[error("Detected order does not match the order shape: {0}")]
    InvalidOrder(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error")]
    InternalServerError,
}
