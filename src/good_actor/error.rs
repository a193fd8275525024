use crate::domain::GoodId;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GoodError {
    #[error("Good not found: {0}")]
    NotFound(GoodId),
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },
    #[error("Stock overflow: {available} available, {released} released")]
    StockOverflow { available: u32, released: u32 },
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
