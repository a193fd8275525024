//! Submitted orders and the admin listing over them.

pub mod entity;
pub mod error;
pub mod query;

pub use error::*;
pub use query::*;
