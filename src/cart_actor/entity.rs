use super::actions::{CartAction, CartActionResult};
use super::error::CartError;
use crate::actor_framework::Entity;
use crate::domain::{BuyerId, Cart, CartLine, GoodRef};

impl Entity for Cart {
    type Id = BuyerId;
    type CreateParams = ();
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Error = CartError;

    fn id(&self) -> &BuyerId {
        &self.buyer
    }

    fn from_create_params(id: BuyerId, _params: ()) -> Result<Self, CartError> {
        Ok(Cart::new(id))
    }

    /// Every buyer has a cart; the first action on it starts an empty one.
    fn on_missing(id: &BuyerId) -> Option<Self> {
        Some(Cart::new(id.clone()))
    }

    /// Empty carts are not kept; the next action starts a fresh one.
    fn is_vacant(&self) -> bool {
        self.lines.is_empty()
    }

    fn handle_action(&mut self, action: CartAction) -> Result<CartActionResult, CartError> {
        match action {
            CartAction::Add(line) => {
                self.add_line(line);
                Ok(CartActionResult::Lines(self.lines.clone()))
            }
            CartAction::Remove(reference) => {
                let (removed, position) = self.remove_units(&reference)?;
                Ok(CartActionResult::Removed {
                    removed,
                    position,
                    lines: self.lines.clone(),
                })
            }
            CartAction::TakeAll => Ok(CartActionResult::Taken(std::mem::take(&mut self.lines))),
            CartAction::Restore(restored) => {
                let current = std::mem::replace(&mut self.lines, restored);
                for line in current {
                    self.add_line(line);
                }
                Ok(CartActionResult::Lines(self.lines.clone()))
            }
            CartAction::Reinsert { line, position } => {
                match self.lines.iter_mut().find(|existing| existing.good_id == line.good_id) {
                    Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
                    None => self.lines.insert(position.min(self.lines.len()), line),
                }
                Ok(CartActionResult::Lines(self.lines.clone()))
            }
        }
    }
}

impl Cart {
    fn add_line(&mut self, line: CartLine) {
        match self.lines.iter_mut().find(|existing| existing.good_id == line.good_id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
            None => self.lines.push(line),
        }
    }

    fn remove_units(&mut self, reference: &GoodRef) -> Result<(CartLine, usize), CartError> {
        let position = self
            .lines
            .iter()
            .position(|line| line.matches(reference))
            .ok_or_else(|| CartError::NotInCart {
                title: reference.title.clone(),
                price: reference.price,
            })?;

        let line = &mut self.lines[position];
        let units = reference.units().min(line.quantity);
        let removed = CartLine {
            quantity: units,
            ..line.clone()
        };

        line.quantity -= units;
        if line.quantity == 0 {
            self.lines.remove(position);
        }
        Ok((removed, position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Good, OrderStatus};
    use rust_decimal_macros::dec;

    fn juice() -> Good {
        Good::new(3, "Juice", dec!(2), 5, "This is a juice")
    }

    fn book() -> Good {
        Good::new(1, "Book", dec!(5.5), 5, "This is a book")
    }

    fn cart_with(lines: Vec<CartLine>) -> Cart {
        Cart {
            buyer: BuyerId::from("admin"),
            lines,
        }
    }

    #[test]
    fn adding_same_good_increments_line() {
        let mut cart = Cart::on_missing(&BuyerId::from("admin")).unwrap();
        assert_eq!(cart.status(), None);

        cart.handle_action(CartAction::Add(CartLine::from_good(&juice(), 1))).unwrap();
        let result = cart.handle_action(CartAction::Add(CartLine::from_good(&juice(), 2))).unwrap();

        let CartActionResult::Lines(lines) = result else {
            panic!("unexpected result: {result:?}");
        };
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].quantity, 3);
        assert_eq!(cart.status(), Some(OrderStatus::Pending));
    }

    #[test]
    fn remove_takes_requested_units_and_drops_empty_line() {
        let mut cart = cart_with(vec![CartLine::from_good(&juice(), 3), CartLine::from_good(&book(), 1)]);

        let result = cart
            .handle_action(CartAction::Remove(GoodRef::new("Juice", dec!(2)).with_quantity(2)))
            .unwrap();
        assert!(matches!(result, CartActionResult::Removed { ref removed, .. } if removed.quantity == 2));
        assert_eq!(cart.lines[0].quantity, 1);

        // Asking for more than is left removes the whole line.
        let result = cart
            .handle_action(CartAction::Remove(GoodRef::new("Juice", dec!(2.00)).with_quantity(9)))
            .unwrap();
        let CartActionResult::Removed { removed, position, lines } = result else {
            panic!("unexpected result: {result:?}");
        };
        assert_eq!(removed.quantity, 1);
        assert_eq!(position, 0);
        assert_eq!(lines, vec![CartLine::from_good(&book(), 1)]);
    }

    #[test]
    fn reinsert_returns_units_to_their_place() {
        let mut cart = cart_with(vec![CartLine::from_good(&juice(), 1), CartLine::from_good(&book(), 2)]);

        // Whole line removed: it comes back at its old index.
        let CartActionResult::Removed { removed, position, .. } = cart
            .handle_action(CartAction::Remove(GoodRef::new("Juice", dec!(2))))
            .unwrap()
        else {
            panic!("expected removed units");
        };
        cart.handle_action(CartAction::Reinsert { line: removed, position }).unwrap();
        assert_eq!(cart.lines, vec![CartLine::from_good(&juice(), 1), CartLine::from_good(&book(), 2)]);

        // Part of a line removed: the units merge back into it.
        let CartActionResult::Removed { removed, position, .. } = cart
            .handle_action(CartAction::Remove(GoodRef::new("Book", dec!(5.5))))
            .unwrap()
        else {
            panic!("expected removed units");
        };
        assert_eq!(position, 1);
        cart.handle_action(CartAction::Reinsert { line: removed, position }).unwrap();
        assert_eq!(cart.lines, vec![CartLine::from_good(&juice(), 1), CartLine::from_good(&book(), 2)]);
    }

    #[test]
    fn removing_absent_good_is_not_in_cart() {
        let mut cart = cart_with(vec![CartLine::from_good(&book(), 1)]);

        let result = cart.handle_action(CartAction::Remove(GoodRef::new("Phone", dec!(200))));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Product with title Phone and price 200 $ is not in the cart"
        );
        assert_eq!(cart.lines.len(), 1);
    }

    #[test]
    fn take_all_empties_and_restore_merges_in_front() {
        let mut cart = cart_with(vec![CartLine::from_good(&juice(), 1), CartLine::from_good(&book(), 1)]);

        let CartActionResult::Taken(taken) = cart.handle_action(CartAction::TakeAll).unwrap() else {
            panic!("expected taken lines");
        };
        assert_eq!(taken.len(), 2);
        assert!(cart.lines.is_empty());

        // A book added meanwhile merges into the restored book line.
        cart.handle_action(CartAction::Add(CartLine::from_good(&book(), 1))).unwrap();
        cart.handle_action(CartAction::Restore(taken)).unwrap();

        assert_eq!(cart.lines.len(), 2);
        assert_eq!(cart.lines[0].title, "Juice");
        assert_eq!(cart.lines[1].quantity, 2);
    }
}
