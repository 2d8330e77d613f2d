use tracing::{info, warn};
use validator::Validate;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    conversation::ports::LLMClient,
    extraction::{Extraction, inspect},
    order::{
        entities::Order,
        ports::{OrderRepository, OrderService},
        value_objects::{
            CommitOrderInput, CreateOrderInput, DeleteOrderInput, GetOrderInput,
            UpdateOrderInput,
        },
    },
};

impl<OR, LLM> OrderService for Service<OR, LLM>
where
    OR: OrderRepository,
    LLM: LLMClient,
{
    async fn create_order(&self, input: CreateOrderInput) -> Result<Order, CoreError> {
        input.draft.validate().map_err(|e| {
            warn!(reason = %e, "refusing to store order that fails validation");
            CoreError::InvalidOrder(e.to_string())
        })?;

        let order = Order::new(input.draft);
        let created_order = self.order_repository.create_order(order).await?;

        info!(order_id = %created_order.id, items = created_order.items.len(), "order created");

        Ok(created_order)
    }

    async fn get_orders(&self) -> Result<Vec<Order>, CoreError> {
        self.order_repository.fetch_orders().await
    }

    async fn get_order(&self, input: GetOrderInput) -> Result<Option<Order>, CoreError> {
        self.order_repository.get_order_by_id(input.order_id).await
    }

    async fn update_order(&self, input: UpdateOrderInput) -> Result<(), CoreError> {
        if input.patch.is_empty() {
            return Ok(());
        }

        input
            .patch
            .check()
            .map_err(|e| CoreError::InvalidOrder(e.to_string()))?;

        self.order_repository
            .update_order(input.order_id, input.patch)
            .await
    }

    async fn delete_order(&self, input: DeleteOrderInput) -> Result<(), CoreError> {
        self.order_repository.delete_order(input.order_id).await
    }

    async fn commit_order(&self, input: CommitOrderInput) -> Result<Order, CoreError> {
        let draft = match inspect(&input.model_text) {
            Extraction::Candidate { draft, .. } => draft,
            Extraction::Absent => return Err(CoreError::IncompleteOrder),
            Extraction::Malformed { reason } => {
                warn!(%reason, "refusing to commit malformed order JSON");
                return Err(CoreError::MalformedOrder(reason));
            }
            Extraction::Invalid { reason, .. } => {
                warn!(%reason, "refusing to commit order that fails validation");
                return Err(CoreError::InvalidOrder(reason));
            }
        };

        self.create_order(CreateOrderInput { draft }).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        conversation::entities::ChatMessage,
        order::{entities::OrderDraft, value_objects::OrderPatch},
    };
    use crate::infrastructure::order::InMemoryOrderRepository;
    use serde_json::json;
    use uuid::Uuid;

    #[derive(Clone)]
    struct SilentOracle;

    impl LLMClient for SilentOracle {
        async fn generate_chat(&self, _messages: Vec<ChatMessage>) -> Result<String, CoreError> {
            Err(CoreError::ExternalServiceError("unused".to_string()))
        }
    }

    fn service() -> Service<InMemoryOrderRepository, SilentOracle> {
        Service::new(InMemoryOrderRepository::new(), SilentOracle)
    }

    fn draft(customer: &str) -> OrderDraft {
        OrderDraft::from_value(&json!({
            "cliente": customer,
            "items": [
                { "producto": "Hamburguesa", "cantidad": 2 },
                { "producto": "Refresco", "cantidad": 1 }
            ],
            "observaciones": "sin pepinillos"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_then_list_round_trips_document() {
        let service = service();
        let created = service
            .create_order(CreateOrderInput { draft: draft("Ana") })
            .await
            .unwrap();

        let orders = service.get_orders().await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].id, created.id);
        assert_eq!(orders[0].document(), draft("Ana"));
    }

    #[tokio::test]
    async fn test_update_customer_keeps_other_fields() {
        let service = service();
        let created = service
            .create_order(CreateOrderInput { draft: draft("Ana") })
            .await
            .unwrap();

        service
            .update_order(UpdateOrderInput {
                order_id: created.id,
                patch: OrderPatch {
                    customer: Some("X".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        let orders = service.get_orders().await.unwrap();
        assert_eq!(orders[0].customer, "X");
        assert_eq!(orders[0].items, created.items);
        assert_eq!(orders[0].notes, created.notes);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_draft() {
        let service = service();

        let drafts = [
            OrderDraft {
                customer: String::new(),
                items: vec![],
                notes: None,
            },
            OrderDraft {
                customer: "Ana".to_string(),
                items: vec![],
                notes: None,
            },
            OrderDraft {
                customer: "   ".to_string(),
                items: draft("Ana").items,
                notes: None,
            },
        ];

        for invalid in drafts {
            let err = service
                .create_order(CreateOrderInput { draft: invalid })
                .await
                .unwrap_err();
            assert!(matches!(err, CoreError::InvalidOrder(_)), "got {err}");
        }

        assert!(service.get_orders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_patch() {
        let service = service();
        let created = service
            .create_order(CreateOrderInput { draft: draft("Ana") })
            .await
            .unwrap();

        let err = service
            .update_order(UpdateOrderInput {
                order_id: created.id,
                patch: OrderPatch {
                    items: Some(vec![]),
                    ..Default::default()
                },
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidOrder(_)));

        let stored = service.get_orders().await.unwrap();
        assert_eq!(stored[0].items, created.items);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_noop() {
        let service = service();
        service
            .create_order(CreateOrderInput { draft: draft("Ana") })
            .await
            .unwrap();

        service
            .update_order(UpdateOrderInput {
                order_id: Uuid::new_v4(),
                patch: OrderPatch {
                    customer: Some("X".to_string()),
                    ..Default::default()
                },
            })
            .await
            .unwrap();

        assert_eq!(service.get_orders().await.unwrap()[0].customer, "Ana");
    }

    #[tokio::test]
    async fn test_delete_twice_does_not_fail() {
        let service = service();
        let created = service
            .create_order(CreateOrderInput { draft: draft("Ana") })
            .await
            .unwrap();

        service
            .delete_order(DeleteOrderInput { order_id: created.id })
            .await
            .unwrap();
        service
            .delete_order(DeleteOrderInput { order_id: created.id })
            .await
            .unwrap();

        let orders = service.get_orders().await.unwrap();
        assert!(orders.iter().all(|order| order.id != created.id));
    }

    #[tokio::test]
    async fn test_commit_fenced_reply() {
        let service = service();
        let reply = "```json\n{\"cliente\":\"Ana\",\"items\":[{\"producto\":\"Pizza\",\"cantidad\":1}],\"observaciones\":\"\"}\n```";

        let order = service
            .commit_order(CommitOrderInput {
                model_text: reply.to_string(),
            })
            .await
            .unwrap();

        assert_eq!(order.customer, "Ana");
        assert_eq!(service.get_orders().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_commit_rejections_never_reach_store() {
        let service = service();

        let cases = [
            ("¿Cuántas hamburguesas desea?", CoreError::IncompleteOrder),
            (
                "{\"cliente\":\"Ana\",\"items\":[],}",
                CoreError::MalformedOrder(String::new()),
            ),
            (
                "{\"cliente\":\"Ana\",\"observaciones\":\"\"}",
                CoreError::InvalidOrder(String::new()),
            ),
        ];

        for (text, expected) in cases {
            let err = service
                .commit_order(CommitOrderInput {
                    model_text: text.to_string(),
                })
                .await
                .unwrap_err();
            assert_eq!(
                std::mem::discriminant(&err),
                std::mem::discriminant(&expected),
                "unexpected error for {text:?}: {err}"
            );
        }

        assert!(service.get_orders().await.unwrap().is_empty());
    }
}
