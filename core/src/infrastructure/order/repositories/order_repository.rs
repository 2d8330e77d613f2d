use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    order::{entities::Order, ports::OrderRepository, value_objects::OrderPatch},
};
use crate::entity::orders::{
    ActiveModel as OrderActiveModel, Column as OrderColumn, Entity as OrderEntity,
};

/// Orders as JSONB documents in the `orders` table.
#[derive(Debug, Clone)]
pub struct PostgresOrderRepository {
    pub db: DatabaseConnection,
}

impl PostgresOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_order(model: crate::entity::orders::Model) -> Result<Order, CoreError> {
    let order_id = model.id;
    Order::try_from(model).map_err(|e| {
        error!("Stored order {} is not a valid document: {}", order_id, e);
        CoreError::InternalServerError
    })
}

impl OrderRepository for PostgresOrderRepository {
    async fn create_order(&self, order: Order) -> Result<Order, CoreError> {
        let document = serde_json::to_value(order.document()).map_err(|e| {
            error!("Failed to serialize order document: {}", e);
            CoreError::InternalServerError
        })?;

        let created_order = OrderEntity::insert(OrderActiveModel {
            id: Set(order.id),
            document: Set(document),
            created_at: Set(order.created_at.naive_utc()),
            updated_at: Set(order.updated_at.naive_utc()),
        })
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| {
            error!("Failed to create order: {}", e);
            CoreError::InternalServerError
        })?;

        to_order(created_order)
    }

    async fn fetch_orders(&self) -> Result<Vec<Order>, CoreError> {
        OrderEntity::find()
            .order_by_asc(OrderColumn::CreatedAt)
            .order_by_asc(OrderColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch orders: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(to_order)
            .collect()
    }

    async fn get_order_by_id(&self, order_id: Uuid) -> Result<Option<Order>, CoreError> {
        OrderEntity::find_by_id(order_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get order by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(to_order)
            .transpose()
    }

    async fn update_order(&self, order_id: Uuid, patch: OrderPatch) -> Result<(), CoreError> {
        let Some(model) = OrderEntity::find_by_id(order_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to load order for update: {}", e);
                CoreError::InternalServerError
            })?
        else {
            return Ok(());
        };

        let mut document = model.document.clone();
        patch.merge_into(&mut document).map_err(|e| {
            error!("Failed to merge order patch: {}", e);
            CoreError::InternalServerError
        })?;

        let mut active_model: OrderActiveModel = model.into();
        active_model.document = Set(document);
        active_model.updated_at = Set(Utc::now().naive_utc());

        active_model.update(&self.db).await.map_err(|e| {
            error!("Failed to update order: {}", e);
            CoreError::InternalServerError
        })?;

        Ok(())
    }

    async fn delete_order(&self, order_id: Uuid) -> Result<(), CoreError> {
        OrderEntity::delete_by_id(order_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete order: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(())
    }
}
