use chrono::{TimeZone, Utc};

use crate::domain::order::entities::{Order, OrderDraft};
use crate::entity::orders::Model as OrderModel;

impl TryFrom<OrderModel> for Order {
    type Error = serde_json::Error;

    fn try_from(model: OrderModel) -> Result<Self, Self::Error> {
        let document: OrderDraft = serde_json::from_value(model.document)?;

        Ok(Order {
            id: model.id,
            customer: document.customer,
            items: document.items,
            notes: document.notes,
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        })
    }
}
