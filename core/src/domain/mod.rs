pub mod common;
pub mod conversation;
pub mod extraction;
pub mod order;
