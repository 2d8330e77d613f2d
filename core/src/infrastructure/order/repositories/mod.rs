pub mod memory_order_repository;
pub mod order_repository;
pub mod order_store;

pub use memory_order_repository::InMemoryOrderRepository;
pub use order_repository::PostgresOrderRepository;
pub use order_store::OrderStore;
