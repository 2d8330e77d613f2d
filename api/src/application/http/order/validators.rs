use mesero_core::domain::order::{entities::OrderItem, value_objects::OrderPatch};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderValidator {
    #[serde(rename = "cliente", alias = "customer", default)]
    #[validate(custom(function = "not_blank", message = "cliente must not be empty"))]
    pub customer: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "valid_items"))]
    pub items: Option<Vec<OrderItem>>,

    #[serde(rename = "observaciones", alias = "notes", default)]
    pub notes: Option<String>,
}

impl From<UpdateOrderValidator> for OrderPatch {
    fn from(payload: UpdateOrderValidator) -> Self {
        OrderPatch {
            customer: payload.customer,
            items: payload.items,
            notes: payload.notes,
        }
    }
}

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn valid_items(items: &Vec<OrderItem>) -> Result<(), ValidationError> {
    if items.is_empty() {
        return Err(ValidationError::new("empty").with_message("items must not be empty".into()));
    }
    if items.iter().any(|item| item.validate().is_err()) {
        return Err(ValidationError::new("item").with_message("producto must not be empty".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_validator_rules() {
        let ok: UpdateOrderValidator = serde_json::from_value(json!({ "cliente": "X" })).unwrap();
        assert!(ok.validate().is_ok());

        let blank: UpdateOrderValidator = serde_json::from_value(json!({ "customer": " " })).unwrap();
        assert!(blank.validate().is_err());

        let empty_items: UpdateOrderValidator =
            serde_json::from_value(json!({ "items": [] })).unwrap();
        assert!(empty_items.validate().is_err());
    }

    #[test]
    fn test_into_patch() {
        let payload: UpdateOrderValidator =
            serde_json::from_value(json!({ "observaciones": "para llevar" })).unwrap();
        let patch = OrderPatch::from(payload);
        assert_eq!(patch.notes.as_deref(), Some("para llevar"));
        assert!(patch.customer.is_none());
        assert!(patch.items.is_none());
    }
}
