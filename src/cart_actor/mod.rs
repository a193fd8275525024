//! Buyer carts (pending orders) and the actions that mutate them.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
