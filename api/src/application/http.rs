pub mod conversation;
pub mod health;
pub mod order;
pub mod server;
