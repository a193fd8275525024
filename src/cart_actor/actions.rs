use crate::domain::{CartLine, GoodRef};

/// Custom actions for Cart entities.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Appends a line, or adds its units to the line for the same good.
    Add(CartLine),
    /// Removes up to `units()` of the referenced good.
    ///
    /// # Errors
    /// Fails with `NotInCart` when no line matches the reference.
    Remove(GoodRef),
    /// Empties the cart, handing back every line in insertion order.
    TakeAll,
    /// Puts previously taken lines back in front of whatever the cart holds now.
    Restore(Vec<CartLine>),
    /// Returns removed units to the line they came from, or recreates that
    /// line at `position`.
    Reinsert { line: CartLine, position: usize },
}

/// Results from CartActions.
#[derive(Debug, Clone, PartialEq)]
pub enum CartActionResult {
    /// The cart's lines after the action.
    Lines(Vec<CartLine>),
    /// The units taken out by `Remove`, the index of their line, and the
    /// lines left behind.
    Removed {
        removed: CartLine,
        position: usize,
        lines: Vec<CartLine>,
    },
    /// Everything `TakeAll` removed.
    Taken(Vec<CartLine>),
}
