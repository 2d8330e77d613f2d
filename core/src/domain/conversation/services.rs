use tracing::{debug, error};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    conversation::{
        entities::{ChatMessage, Turn},
        instruction::ORDER_TAKING_INSTRUCTION,
        ports::{ConversationService, LLMClient},
        value_objects::RespondInput,
    },
    order::ports::OrderRepository,
};

/// Builds one oracle request: the instruction, then the history oldest
/// first, then the new user message.
pub fn build_oracle_request(history: &[Turn], user_message: &str) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ChatMessage::system(ORDER_TAKING_INSTRUCTION));
    messages.extend(history.iter().map(ChatMessage::from));
    messages.push(ChatMessage::user(user_message));
    messages
}

impl<OR, LLM> ConversationService for Service<OR, LLM>
where
    OR: OrderRepository,
    LLM: LLMClient,
{
    async fn respond(&self, input: RespondInput) -> Result<String, CoreError> {
        let messages = build_oracle_request(&input.history, &input.user_message);

        debug!(turns = input.history.len(), "sending conversation to oracle");

        self.llm_client.generate_chat(messages).await.map_err(|e| {
            error!("Oracle call failed: {}", e);
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::domain::{
        conversation::entities::ChatRole,
        extraction::extract,
    };
    use crate::infrastructure::order::InMemoryOrderRepository;

    #[derive(Clone, Default)]
    struct ScriptedOracle {
        reply: Option<String>,
        requests: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
    }

    impl ScriptedOracle {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
                ..Default::default()
            }
        }

        fn requests(&self) -> Vec<Vec<ChatMessage>> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl LLMClient for ScriptedOracle {
        async fn generate_chat(&self, messages: Vec<ChatMessage>) -> Result<String, CoreError> {
            self.requests.lock().unwrap().push(messages);
            self.reply
                .clone()
                .ok_or_else(|| CoreError::ExternalServiceError("quota exceeded".to_string()))
        }
    }

    fn service(oracle: ScriptedOracle) -> Service<InMemoryOrderRepository, ScriptedOracle> {
        Service::new(InMemoryOrderRepository::new(), oracle)
    }

    #[tokio::test]
    async fn test_instruction_first_with_empty_history() {
        let oracle = ScriptedOracle::replying("¿Para quién es el pedido?");
        let service = service(oracle.clone());

        let reply = service
            .respond(RespondInput {
                history: vec![],
                user_message: "Quiero 2 hamburguesas".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(reply, "¿Para quién es el pedido?");
        assert_eq!(extract(&reply), None);

        let requests = oracle.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0],
            vec![
                ChatMessage::system(ORDER_TAKING_INSTRUCTION),
                ChatMessage::user("Quiero 2 hamburguesas"),
            ]
        );
    }

    #[tokio::test]
    async fn test_instruction_first_with_history() {
        let oracle = ScriptedOracle::replying("ok");
        let service = service(oracle.clone());

        let history = vec![
            Turn::user("Hola"),
            Turn::model("¡Hola! ¿Qué desea pedir?"),
        ];

        service
            .respond(RespondInput {
                history: history.clone(),
                user_message: "Una pizza".to_string(),
            })
            .await
            .unwrap();

        let request = &oracle.requests()[0];
        assert_eq!(request.len(), 4);
        assert_eq!(request[0].role, ChatRole::System);
        assert_eq!(request[0].content, ORDER_TAKING_INSTRUCTION);
        assert_eq!(request[1], ChatMessage::from(&history[0]));
        assert_eq!(request[2].role, ChatRole::Model);
        assert_eq!(request[3], ChatMessage::user("Una pizza"));
    }

    #[tokio::test]
    async fn test_reply_is_returned_unmodified() {
        let raw = "  ```json\n{\"cliente\":\"Ana\"}\n```  ";
        let service = service(ScriptedOracle::replying(raw));

        let reply = service
            .respond(RespondInput {
                history: vec![],
                user_message: "listo".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(reply, raw);
    }

    #[tokio::test]
    async fn test_oracle_failure_propagates() {
        let service = service(ScriptedOracle::default());

        let err = service
            .respond(RespondInput {
                history: vec![],
                user_message: "hola".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }
}
