use mesero_core::domain::{
    conversation::entities::ConversationSession,
    extraction::{Extraction, inspect},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A session together with what its latest assistant reply holds.
#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SessionView {
    pub session: ConversationSession,
    pub extraction: Extraction,
}

impl From<&ConversationSession> for SessionView {
    fn from(session: &ConversationSession) -> Self {
        let extraction = session
            .latest_model_turn()
            .map(|turn| inspect(&turn.text))
            .unwrap_or(Extraction::Absent);

        SessionView {
            session: session.clone(),
            extraction,
        }
    }
}
