//! Order DTOs.
//!
//! One shape serves both the saved draft (`currentForm`) and each entry of
//! the order history (`orders`):
//!
//! ```json
//! {
//!   "name": "Asha", "phone": "9000000000", "address": "Near temple",
//!   "paymentDone": true, "orderDate": "2025-02-20",
//!   "items": [ { "name": "Omapodi (250GMS)", "price": 90, "quantity": 3 } ]
//! }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use rusikaram_core::error::RusikaramError;
use rusikaram_core::order::{DraftOrder, LineItems, OrderLine, SubmittedOrder};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemDTO {
    pub name: String,
    pub price: u32,
    pub quantity: u32,
}

impl From<&OrderLine> for OrderItemDTO {
    fn from(line: &OrderLine) -> Self {
        OrderItemDTO {
            name: line.name.clone(),
            price: line.unit_price,
            quantity: line.quantity,
        }
    }
}

impl From<OrderItemDTO> for OrderLine {
    fn from(dto: OrderItemDTO) -> Self {
        OrderLine {
            name: dto.name,
            unit_price: dto.price,
            quantity: dto.quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFormDTO {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub payment_done: bool,
    pub order_date: NaiveDate,
    pub items: Vec<OrderItemDTO>,
}

impl From<&DraftOrder> for OrderFormDTO {
    fn from(draft: &DraftOrder) -> Self {
        OrderFormDTO {
            name: draft.customer_name.clone(),
            phone: draft.phone.clone(),
            address: draft.address.clone(),
            payment_done: draft.payment_received,
            order_date: draft.order_date,
            items: draft.lines().iter().map(OrderItemDTO::from).collect(),
        }
    }
}

impl From<&SubmittedOrder> for OrderFormDTO {
    fn from(order: &SubmittedOrder) -> Self {
        OrderFormDTO {
            name: order.customer_name().to_string(),
            phone: order.phone().to_string(),
            address: order.address().to_string(),
            payment_done: order.payment_received(),
            order_date: order.order_date(),
            items: order.lines().iter().map(OrderItemDTO::from).collect(),
        }
    }
}

impl From<OrderFormDTO> for SubmittedOrder {
    fn from(dto: OrderFormDTO) -> Self {
        SubmittedOrder::restore(
            dto.name,
            dto.phone,
            dto.address,
            dto.payment_done,
            dto.order_date,
            dto.items.into_iter().map(OrderLine::from).collect(),
        )
    }
}

/// A stored draft must still line up with the catalog.
impl TryFrom<OrderFormDTO> for DraftOrder {
    type Error = RusikaramError;

    fn try_from(dto: OrderFormDTO) -> Result<Self, Self::Error> {
        DraftOrder::restore(
            dto.name,
            dto.phone,
            dto.address,
            dto.payment_done,
            dto.order_date,
            dto.items
                .into_iter()
                .map(|item| (item.name, item.quantity))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 20).unwrap()
    }

    #[test]
    fn test_draft_serializes_to_form_shape() {
        let mut draft = DraftOrder::blank(date());
        draft.customer_name = "Asha".into();
        draft.phone = "9000000000".into();
        draft.payment_received = true;
        draft.set_quantity(1, 3);

        let value = serde_json::to_value(OrderFormDTO::from(&draft)).unwrap();
        assert_eq!(value["name"], json!("Asha"));
        assert_eq!(value["paymentDone"], json!(true));
        assert_eq!(value["orderDate"], json!("2025-02-20"));
        assert_eq!(value["items"].as_array().unwrap().len(), 10);
        assert_eq!(
            value["items"][1],
            json!({"name": "Omapodi (250GMS)", "price": 90, "quantity": 3})
        );
    }

    #[test]
    fn test_submitted_order_keeps_recorded_prices() {
        let dto: OrderFormDTO = serde_json::from_value(json!({
            "name": "Ravi",
            "phone": "9111111111",
            "address": "",
            "paymentDone": false,
            "orderDate": "2024-12-31",
            "items": [{"name": "Old special", "price": 120, "quantity": 2}]
        }))
        .unwrap();

        let order = SubmittedOrder::from(dto);
        assert_eq!(order.lines().len(), 1);
        assert_eq!(order.lines()[0].amount(), 240);
    }

    #[test]
    fn test_draft_with_wrong_items_is_rejected() {
        let dto = OrderFormDTO {
            name: String::new(),
            phone: String::new(),
            address: String::new(),
            payment_done: false,
            order_date: date(),
            items: vec![],
        };
        assert!(DraftOrder::try_from(dto).is_err());
    }

    #[test]
    fn test_negative_quantity_fails_to_parse() {
        let result = serde_json::from_value::<OrderItemDTO>(json!({
            "name": "Omapodi (250GMS)", "price": 90, "quantity": -1
        }));
        assert!(result.is_err());
    }
}
