use crate::domain::conversation::entities::Turn;

#[derive(Debug, Clone)]
pub struct RespondInput {
    /// Prior turns, oldest first, not including `user_message`.
    pub history: Vec<Turn>,
    pub user_message: String,
}
