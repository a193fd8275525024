use super::actions::{GoodAction, GoodActionResult};
use super::error::GoodError;
use crate::actor_framework::Entity;
use crate::domain::{Good, GoodId};

impl Entity for Good {
    type Id = GoodId;
    type CreateParams = Good;
    type Action = GoodAction;
    type ActionResult = GoodActionResult;
    type Error = GoodError;

    fn id(&self) -> &GoodId {
        &self.id
    }

    /// Stores the good under the id issued by the catalog actor.
    fn from_create_params(id: GoodId, params: Good) -> Result<Self, GoodError> {
        Ok(Self { id, ..params })
    }

    /// # Actions
    /// - `CheckStock`: Returns the current stock level
    /// - `ReserveStock(amount)`: Decrements stock by the specified amount
    /// - `ReleaseStock(amount)`: Increments stock by the specified amount
    fn handle_action(&mut self, action: GoodAction) -> Result<GoodActionResult, GoodError> {
        match action {
            GoodAction::CheckStock => Ok(GoodActionResult::CheckStock(self.quantity)),
            GoodAction::ReserveStock(amount) => {
                if self.quantity >= amount {
                    self.quantity -= amount;
                    Ok(GoodActionResult::ReserveStock(self.quantity))
                } else {
                    Err(GoodError::InsufficientStock {
                        requested: amount,
                        available: self.quantity,
                    })
                }
            }
            GoodAction::ReleaseStock(amount) => {
                self.quantity = self.quantity.checked_add(amount).ok_or(GoodError::StockOverflow {
                    available: self.quantity,
                    released: amount,
                })?;
                Ok(GoodActionResult::ReleaseStock(self.quantity))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn phone(quantity: u32) -> Good {
        Good::new(7, "Phone", dec!(100), quantity, "This is a phone")
    }

    #[test]
    fn reserve_decrements_until_exhausted() {
        let mut good = phone(2);

        assert_eq!(good.handle_action(GoodAction::ReserveStock(2)), Ok(GoodActionResult::ReserveStock(0)));
        assert_eq!(
            good.handle_action(GoodAction::ReserveStock(1)),
            Err(GoodError::InsufficientStock { requested: 1, available: 0 })
        );
        assert_eq!(good.quantity, 0);
    }

    #[test]
    fn release_restores_stock() {
        let mut good = phone(0);

        assert_eq!(good.handle_action(GoodAction::ReleaseStock(3)), Ok(GoodActionResult::ReleaseStock(3)));
        assert_eq!(good.handle_action(GoodAction::CheckStock), Ok(GoodActionResult::CheckStock(3)));
    }

    #[test]
    fn release_overflow_is_rejected() {
        let mut good = phone(u32::MAX);

        assert!(matches!(
            good.handle_action(GoodAction::ReleaseStock(1)),
            Err(GoodError::StockOverflow { .. })
        ));
    }

    #[test]
    fn created_good_takes_issued_id() {
        let good = Good::from_create_params(GoodId(42), phone(1)).unwrap();
        assert_eq!(good.id, GoodId(42));
        assert_eq!(good.title, "Phone");
    }
}
