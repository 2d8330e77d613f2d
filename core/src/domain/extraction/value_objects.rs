use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::order::entities::OrderDraft;

/// What the latest assistant reply holds, order-wise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Extraction {
    /// No `{ … }` span in the text; the conversation simply continues.
    Absent,
    /// A `{ … }` span exists but is not valid JSON.
    Malformed { reason: String },
    /// Valid JSON that does not describe a complete order.
    Invalid {
        #[schema(value_type = Object)]
        payload: serde_json::Value,
        reason: String,
    },
    /// Valid JSON that passed order validation and may be committed.
    Candidate {
        #[schema(value_type = Object)]
        payload: serde_json::Value,
        draft: OrderDraft,
    },
}

impl Extraction {
    pub fn is_candidate(&self) -> bool {
        matches!(self, Extraction::Candidate { .. })
    }

    pub fn payload(&self) -> Option<&serde_json::Value> {
        match self {
            Extraction::Invalid { payload, .. } | Extraction::Candidate { payload, .. } => {
                Some(payload)
            }
            Extraction::Absent | Extraction::Malformed { .. } => None,
        }
    }
}
