use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::order::entities::{OrderDraft, OrderItem, OrderValidationError};

/// Partial order fields. Only the fields that are present replace the stored
/// ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderPatch {
    #[serde(
        rename = "cliente",
        alias = "customer",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub customer: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItem>>,

    #[serde(
        rename = "observaciones",
        alias = "notes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
}

impl OrderPatch {
    pub fn is_empty(&self) -> bool {
        self.customer.is_none() && self.items.is_none() && self.notes.is_none()
    }

    /// Applies the order field rules to the fields that are present.
    pub fn check(&self) -> Result<(), OrderValidationError> {
        if self
            .customer
            .as_deref()
            .is_some_and(|customer| customer.trim().is_empty())
        {
            return Err(OrderValidationError::Rules(
                "cliente must not be empty".to_string(),
            ));
        }

        if let Some(items) = &self.items {
            if items.is_empty() {
                return Err(OrderValidationError::Rules(
                    "items must contain at least one product".to_string(),
                ));
            }
            for item in items {
                item.validate()?;
            }
        }

        Ok(())
    }

    /// Sets every present field on a stored JSON document, leaving the other
    /// keys untouched.
    pub fn merge_into(&self, document: &mut serde_json::Value) -> Result<(), serde_json::Error> {
        let serde_json::Value::Object(fields) = serde_json::to_value(self)? else {
            return Ok(());
        };

        if !document.is_object() {
            *document = serde_json::Value::Object(serde_json::Map::new());
        }

        if let Some(target) = document.as_object_mut() {
            for (key, value) in fields {
                target.insert(key, value);
            }
        }

        Ok(())
    }
}

pub struct CreateOrderInput {
    pub draft: OrderDraft,
}

pub struct GetOrderInput {
    pub order_id: Uuid,
}

pub struct UpdateOrderInput {
    pub order_id: Uuid,
    pub patch: OrderPatch,
}

pub struct DeleteOrderInput {
    pub order_id: Uuid,
}

pub struct CommitOrderInput {
    /// Text of the latest assistant turn.
    pub model_text: String,
}
