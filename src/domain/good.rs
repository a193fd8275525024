use super::GoodId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a product in the catalog.
///
/// `quantity` is the stock still available for purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Good {
    pub id: GoodId,
    pub title: String,
    pub price: Decimal,
    pub quantity: u32,
    pub description: String,
}

impl Good {
    #[allow(dead_code)]
    pub fn new(
        id: u64,
        title: impl Into<String>,
        price: Decimal,
        quantity: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: GoodId(id),
            title: title.into(),
            price,
            quantity,
            description: description.into(),
        }
    }

    /// Exact (title, price) match; prices compare numerically.
    pub fn matches(&self, reference: &GoodRef) -> bool {
        self.title == reference.title && self.price == reference.price
    }
}

/// A buyer's reference to a catalog good, as sent with add/remove requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoodRef {
    pub title: String,
    pub price: Decimal,
    #[serde(default = "GoodRef::single_unit")]
    pub quantity: u32,
}

impl GoodRef {
    pub fn new(title: impl Into<String>, price: Decimal) -> Self {
        Self {
            title: title.into(),
            price,
            quantity: Self::single_unit(),
        }
    }

    #[allow(dead_code)]
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Units this reference asks for; never less than one.
    pub fn units(&self) -> u32 {
        self.quantity.max(1)
    }

    fn single_unit() -> u32 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn matching_compares_price_numerically() {
        let juice = Good::new(3, "Juice", dec!(2), 1, "This is a juice");

        assert!(juice.matches(&GoodRef::new("Juice", dec!(2.00))));
        assert!(!juice.matches(&GoodRef::new("Juice", dec!(2.01))));
        assert!(!juice.matches(&GoodRef::new("juice", dec!(2))));
    }

    #[test]
    fn good_ref_defaults_to_one_unit() {
        let reference: GoodRef = serde_json::from_str(r#"{"title":"Book","price":"5.5"}"#).unwrap();
        assert_eq!(reference.quantity, 1);
        assert_eq!(reference.with_quantity(0).units(), 1);
    }
}
