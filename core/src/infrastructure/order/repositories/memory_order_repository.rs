use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    order::{entities::Order, ports::OrderRepository, value_objects::OrderPatch},
};

/// In-process order collection, selected with a `memory://` connection
/// string. Contents are lost when the process exits.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<Vec<Order>>>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderRepository for InMemoryOrderRepository {
    async fn create_order(&self, order: Order) -> Result<Order, CoreError> {
        self.orders.write().await.push(order.clone());
        Ok(order)
    }

    async fn fetch_orders(&self) -> Result<Vec<Order>, CoreError> {
        Ok(self.orders.read().await.clone())
    }

    async fn get_order_by_id(&self, order_id: Uuid) -> Result<Option<Order>, CoreError> {
        Ok(self
            .orders
            .read()
            .await
            .iter()
            .find(|order| order.id == order_id)
            .cloned())
    }

    async fn update_order(&self, order_id: Uuid, patch: OrderPatch) -> Result<(), CoreError> {
        if let Some(order) = self
            .orders
            .write()
            .await
            .iter_mut()
            .find(|order| order.id == order_id)
        {
            order.apply(patch);
        }
        Ok(())
    }

    async fn delete_order(&self, order_id: Uuid) -> Result<(), CoreError> {
        self.orders.write().await.retain(|order| order.id != order_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::entities::{OrderDraft, OrderItem};

    fn order(customer: &str) -> Order {
        Order::new(OrderDraft {
            customer: customer.to_string(),
            items: vec![OrderItem {
                product: "Empanada".to_string(),
                quantity: 6,
            }],
            notes: None,
        })
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repository = InMemoryOrderRepository::new();
        let first = repository.create_order(order("Ana")).await.unwrap();
        let second = repository.create_order(order("Luis")).await.unwrap();

        let ids: Vec<Uuid> = repository
            .fetch_orders()
            .await
            .unwrap()
            .iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(ids, vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn test_clones_share_the_collection() {
        let repository = InMemoryOrderRepository::new();
        let handle = repository.clone();
        let created = handle.create_order(order("Ana")).await.unwrap();

        assert_eq!(
            repository.get_order_by_id(created.id).await.unwrap(),
            Some(created)
        );
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_ids() {
        let repository = InMemoryOrderRepository::new();
        repository.create_order(order("Ana")).await.unwrap();

        repository
            .update_order(Uuid::new_v4(), OrderPatch::default())
            .await
            .unwrap();
        repository.delete_order(Uuid::new_v4()).await.unwrap();

        assert_eq!(repository.fetch_orders().await.unwrap().len(), 1);
    }
}
