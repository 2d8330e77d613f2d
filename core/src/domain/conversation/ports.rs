use crate::domain::{
    common::entities::app_errors::CoreError,
    conversation::{entities::ChatMessage, value_objects::RespondInput},
};

/// LLM Client trait for calling the hosted chat model
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends the messages as a single completion request and returns the
    /// model's text verbatim.
    fn generate_chat(
        &self,
        messages: Vec<ChatMessage>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ConversationService: Send + Sync {
    fn respond(
        &self,
        input: RespondInput,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}
