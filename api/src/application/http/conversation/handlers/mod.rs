pub mod commit_order;
pub mod create_session;
pub mod delete_session;
pub mod get_session;
pub mod send_message;
