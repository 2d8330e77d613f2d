pub mod create_order;
pub mod delete_order;
pub mod get_order;
pub mod get_orders;
pub mod update_order;
