use crate::domain::OrderId;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    #[error("Your order not placed yet")]
    EmptyOrder,
    #[error("Order with id {0} not found")]
    NotFound(OrderId),
    #[error("Order with id {0} is submitted and cannot be changed")]
    Immutable(OrderId),
    #[error("Order total is too large")]
    TotalOverflow,
    #[error("Invalid order query: {0}")]
    InvalidQuery(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
