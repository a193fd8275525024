use super::{BuyerId, Good, GoodId, GoodRef, OrderStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One good in a cart or order, priced at the moment it was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    #[serde(rename = "id")]
    pub good_id: GoodId,
    pub title: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub price: Decimal,
    pub quantity: u32,
    pub description: String,
}

impl CartLine {
    pub fn from_good(good: &Good, quantity: u32) -> Self {
        Self {
            good_id: good.id,
            title: good.title.clone(),
            price: good.price,
            quantity,
            description: good.description.clone(),
        }
    }

    /// Unit price times quantity; `None` on overflow.
    pub fn line_price(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }

    pub fn matches(&self, reference: &GoodRef) -> bool {
        self.title == reference.title && self.price == reference.price
    }
}

/// A buyer's pending order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub buyer: BuyerId,
    pub lines: Vec<CartLine>,
}

impl Cart {
    pub fn new(buyer: BuyerId) -> Self {
        Self {
            buyer,
            lines: Vec::new(),
        }
    }

    /// `None` while the cart is empty, `Pending` once it holds a line.
    pub fn status(&self) -> Option<OrderStatus> {
        (!self.lines.is_empty()).then_some(OrderStatus::Pending)
    }
}
