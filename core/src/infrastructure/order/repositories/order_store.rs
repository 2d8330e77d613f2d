use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    order::{entities::Order, ports::OrderRepository, value_objects::OrderPatch},
};
use crate::infrastructure::order::repositories::{
    memory_order_repository::InMemoryOrderRepository, order_repository::PostgresOrderRepository,
};

/// The order collection selected by the configured connection string.
#[derive(Debug, Clone)]
pub enum OrderStore {
    Postgres(PostgresOrderRepository),
    Memory(InMemoryOrderRepository),
}

impl OrderRepository for OrderStore {
    async fn create_order(&self, order: Order) -> Result<Order, CoreError> {
        match self {
            OrderStore::Postgres(repository) => repository.create_order(order).await,
            OrderStore::Memory(repository) => repository.create_order(order).await,
        }
    }

    async fn fetch_orders(&self) -> Result<Vec<Order>, CoreError> {
        match self {
            OrderStore::Postgres(repository) => repository.fetch_orders().await,
            OrderStore::Memory(repository) => repository.fetch_orders().await,
        }
    }

    async fn get_order_by_id(&self, order_id: Uuid) -> Result<Option<Order>, CoreError> {
        match self {
            OrderStore::Postgres(repository) => repository.get_order_by_id(order_id).await,
            OrderStore::Memory(repository) => repository.get_order_by_id(order_id).await,
        }
    }

    async fn update_order(&self, order_id: Uuid, patch: OrderPatch) -> Result<(), CoreError> {
        match self {
            OrderStore::Postgres(repository) => repository.update_order(order_id, patch).await,
            OrderStore::Memory(repository) => repository.update_order(order_id, patch).await,
        }
    }

    async fn delete_order(&self, order_id: Uuid) -> Result<(), CoreError> {
        match self {
            OrderStore::Postgres(repository) => repository.delete_order(order_id).await,
            OrderStore::Memory(repository) => repository.delete_order(order_id).await,
        }
    }
}
