//! Business domain types. Pure data with no actor-specific concerns.

pub mod cart;
pub mod good;
pub mod ids;
pub mod order;

pub use cart::*;
pub use good::*;
pub use ids::*;
pub use order::*;
