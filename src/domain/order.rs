use super::{BuyerId, CartLine, OrderId};
use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Lifecycle of an order: a cart is `Pending`, a stored order is `Submitted`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Submitted,
}

/// Represents a submitted customer order.
///
/// Built once from a cart snapshot by [`Order::submitted`]; the total and
/// description are derived from `goods` at that point and never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub buyer: BuyerId,
    pub goods: Vec<CartLine>,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total_price: Decimal,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
}

/// Payload for storing a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub buyer: BuyerId,
    pub goods: Vec<CartLine>,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// `None` when the total does not fit in a `Decimal`.
    pub fn submitted(id: OrderId, params: OrderCreate) -> Option<Self> {
        let total_price = total_price(&params.goods)?;
        let description = describe(&params.goods, total_price);
        Some(Self {
            id,
            buyer: params.buyer,
            goods: params.goods,
            total_price,
            description,
            created_at: params.created_at,
            status: OrderStatus::Submitted,
        })
    }
}

/// Order summary shown to administrators.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAdminView {
    pub id: OrderId,
    pub buyer: BuyerId,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub total_price: Decimal,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Order> for OrderAdminView {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            buyer: order.buyer.clone(),
            total_price: order.total_price,
            description: order.description.clone(),
            created_at: order.created_at,
        }
    }
}

/// Exact sum of every line's price times quantity; `None` on overflow.
pub fn total_price(lines: &[CartLine]) -> Option<Decimal> {
    lines
        .iter()
        .try_fold(Decimal::ZERO, |sum, line| sum.checked_add(line.line_price()?))
}

/// `"1) Juice 2.00 $\n2) Book 5.50 $\n\nTotal: $ 7.50"`
///
/// Every unit gets its own numbered entry at the unit price.
pub fn describe(lines: &[CartLine], total: Decimal) -> String {
    let mut description = lines
        .iter()
        .flat_map(|line| std::iter::repeat(line).take(line.quantity as usize))
        .enumerate()
        .map(|(index, line)| format!("{}) {} {} $", index + 1, line.title, money(line.price)))
        .collect::<Vec<_>>()
        .join("\n");
    description.push_str("\n\nTotal: $ ");
    description.push_str(&money(total));
    description
}

/// Two decimal digits, half away from zero.
pub fn money(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}
