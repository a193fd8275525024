//! Type-safe identifiers.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Catalog identifier of a [`Good`](super::Good).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoodId(pub u64);

impl From<u64> for GoodId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for GoodId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a submitted [`Order`](super::Order).
///
/// Displays as the bare number, which is what buyers see in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The buyer owning a cart, usually the login name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuyerId(pub String);

impl BuyerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BuyerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for BuyerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
