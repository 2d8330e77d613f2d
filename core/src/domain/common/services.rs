use crate::domain::{conversation::ports::LLMClient, order::ports::OrderRepository};

/// Binds the outbound ports together. Domain services are implemented on
/// this type in each domain's `services` module.
#[derive(Clone)]
pub struct Service<OR, LLM>
where
    OR: OrderRepository,
    LLM: LLMClient,
{
    pub(crate) order_repository: OR,
    pub(crate) llm_client: LLM,
}

impl<OR, LLM> Service<OR, LLM>
where
    OR: OrderRepository,
    LLM: LLMClient,
{
    pub fn new(order_repository: OR, llm_client: LLM) -> Self {
        Self {
            order_repository,
            llm_client,
        }
    }
}
