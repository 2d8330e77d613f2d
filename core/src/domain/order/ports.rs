use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    order::{
        entities::Order,
        value_objects::{
            CommitOrderInput, CreateOrderInput, DeleteOrderInput, GetOrderInput, OrderPatch,
            UpdateOrderInput,
        },
    },
};

/// Document collection holding committed orders.
#[cfg_attr(test, mockall::automock)]
pub trait OrderRepository: Send + Sync {
    fn create_order(&self, order: Order) -> impl Future<Output = Result<Order, CoreError>> + Send;

    fn fetch_orders(&self) -> impl Future<Output = Result<Vec<Order>, CoreError>> + Send;

    fn get_order_by_id(
        &self,
        order_id: Uuid,
    ) -> impl Future<Output = Result<Option<Order>, CoreError>> + Send;

    /// Merges `patch` into the stored document. Unknown ids are ignored.
    fn update_order(
        &self,
        order_id: Uuid,
        patch: OrderPatch,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Removes the document. Unknown ids are ignored.
    fn delete_order(&self, order_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait OrderService: Send + Sync {
    fn create_order(
        &self,
        input: CreateOrderInput,
    ) -> impl Future<Output = Result<Order, CoreError>> + Send;

    fn get_orders(&self) -> impl Future<Output = Result<Vec<Order>, CoreError>> + Send;

    fn get_order(
        &self,
        input: GetOrderInput,
    ) -> impl Future<Output = Result<Option<Order>, CoreError>> + Send;

    fn update_order(
        &self,
        input: UpdateOrderInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn delete_order(
        &self,
        input: DeleteOrderInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    /// Extracts and validates the order in an assistant reply, then stores it.
    fn commit_order(
        &self,
        input: CommitOrderInput,
    ) -> impl Future<Output = Result<Order, CoreError>> + Send;
}
