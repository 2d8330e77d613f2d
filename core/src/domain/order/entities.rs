use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::domain::{common::generate_timestamp, order::value_objects::OrderPatch};

/// One line of an order. Wire keys follow the format the assistant is
/// instructed to emit; English keys are accepted on input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, Validate)]
pub struct OrderItem {
    #[serde(rename = "producto", alias = "product")]
    #[validate(length(min = 1, message = "producto must not be empty"))]
    pub product: String,

    #[serde(rename = "cantidad", alias = "quantity")]
    pub quantity: u32,
}

/// An order extracted from a conversation (or submitted directly) that has
/// passed validation but has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, Validate)]
pub struct OrderDraft {
    #[serde(rename = "cliente", alias = "customer")]
    #[validate(custom(function = "not_blank", message = "cliente must not be empty"))]
    pub customer: String,

    #[validate(
        length(min = 1, message = "items must contain at least one product"),
        nested
    )]
    pub items: Vec<OrderItem>,

    #[serde(
        rename = "observaciones",
        alias = "notes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<String>,
}

fn not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderValidationError {
    /// The payload does not deserialize into the order shape.
    Shape(String),
    /// The payload has the right shape but violates a field rule.
    Rules(String),
}

impl std::fmt::Display for OrderValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderValidationError::Shape(reason) | OrderValidationError::Rules(reason) => {
                f.write_str(reason)
            }
        }
    }
}

impl From<ValidationErrors> for OrderValidationError {
    fn from(errors: ValidationErrors) -> Self {
        OrderValidationError::Rules(errors.to_string())
    }
}

impl OrderDraft {
    /// Checks a parsed JSON payload against the order shape and field rules.
    pub fn from_value(payload: &serde_json::Value) -> Result<Self, OrderValidationError> {
        let draft: OrderDraft = serde_json::from_value(payload.clone())
            .map_err(|e| OrderValidationError::Shape(e.to_string()))?;
        draft.validate()?;
        Ok(draft)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: Uuid,
    #[serde(rename = "cliente")]
    pub customer: String,
    pub items: Vec<OrderItem>,
    #[serde(rename = "observaciones", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn new(draft: OrderDraft) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            customer: draft.customer,
            items: draft.items,
            notes: draft.notes,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, patch: OrderPatch) {
        if let Some(customer) = patch.customer {
            self.customer = customer;
        }
        if let Some(items) = patch.items {
            self.items = items;
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
        self.updated_at = Utc::now();
    }

    /// The stored document body, without the identifier and timestamps.
    pub fn document(&self) -> OrderDraft {
        OrderDraft {
            customer: self.customer.clone(),
            items: self.items.clone(),
            notes: self.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pizza_payload() -> serde_json::Value {
        json!({
            "cliente": "Ana",
            "items": [{ "producto": "Pizza", "cantidad": 1 }],
            "observaciones": ""
        })
    }

    #[test]
    fn test_draft_from_spanish_payload() {
        let draft = OrderDraft::from_value(&pizza_payload()).unwrap();
        assert_eq!(draft.customer, "Ana");
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0].product, "Pizza");
        assert_eq!(draft.items[0].quantity, 1);
        assert_eq!(draft.notes.as_deref(), Some(""));
    }

    #[test]
    fn test_draft_accepts_english_keys() {
        let payload = json!({
            "customer": "Luis",
            "items": [{ "product": "Burger", "quantity": 2 }],
        });
        let draft = OrderDraft::from_value(&payload).unwrap();
        assert_eq!(draft.customer, "Luis");
        assert_eq!(draft.items[0].quantity, 2);
        assert_eq!(draft.notes, None);
    }

    #[test]
    fn test_draft_missing_items_is_shape_error() {
        let payload = json!({ "cliente": "Ana", "observaciones": "" });
        let err = OrderDraft::from_value(&payload).unwrap_err();
        assert!(matches!(err, OrderValidationError::Shape(_)));
    }

    #[test]
    fn test_draft_negative_quantity_is_shape_error() {
        let payload = json!({
            "cliente": "Ana",
            "items": [{ "producto": "Pizza", "cantidad": -1 }]
        });
        assert!(matches!(
            OrderDraft::from_value(&payload),
            Err(OrderValidationError::Shape(_))
        ));
    }

    #[test]
    fn test_draft_rules() {
        let empty_items = json!({ "cliente": "Ana", "items": [] });
        assert!(matches!(
            OrderDraft::from_value(&empty_items),
            Err(OrderValidationError::Rules(_))
        ));

        let blank_customer = json!({
            "cliente": "  ",
            "items": [{ "producto": "Pizza", "cantidad": 1 }]
        });
        assert!(matches!(
            OrderDraft::from_value(&blank_customer),
            Err(OrderValidationError::Rules(_))
        ));

        let blank_product = json!({
            "cliente": "Ana",
            "items": [{ "producto": "", "cantidad": 1 }]
        });
        assert!(matches!(
            OrderDraft::from_value(&blank_product),
            Err(OrderValidationError::Rules(_))
        ));
    }

    #[test]
    fn test_apply_patch_only_touches_given_fields() {
        let mut order = Order::new(OrderDraft::from_value(&pizza_payload()).unwrap());
        let before = order.clone();

        order.apply(OrderPatch {
            customer: Some("X".to_string()),
            ..Default::default()
        });

        assert_eq!(order.customer, "X");
        assert_eq!(order.items, before.items);
        assert_eq!(order.notes, before.notes);
        assert_eq!(order.id, before.id);
    }

    #[test]
    fn test_order_serializes_with_wire_keys() {
        let order = Order::new(OrderDraft::from_value(&pizza_payload()).unwrap());
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["cliente"], "Ana");
        assert_eq!(value["items"][0]["producto"], "Pizza");
        assert_eq!(value["items"][0]["cantidad"], 1);
    }
}
