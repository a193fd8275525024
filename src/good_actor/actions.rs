/// Custom actions for Good entities.
///
/// Stock changes go through these actions so the catalog actor applies each
/// check-and-update as one step.
#[derive(Debug, Clone)]
pub enum GoodAction {
    /// Checks the current stock level without modifying it.
    CheckStock,
    /// Takes units out of stock.
    ///
    /// # Errors
    /// Fails if the requested amount exceeds available stock.
    ReserveStock(u32),
    /// Puts units back into stock.
    ReleaseStock(u32),
}

/// Results from GoodActions - variants match 1:1 with GoodAction.
/// Each carries the stock level after the action.
#[derive(Debug, Clone, PartialEq)]
pub enum GoodActionResult {
    CheckStock(u32),
    ReserveStock(u32),
    ReleaseStock(u32),
}
