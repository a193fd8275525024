use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur while changing a cart.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    #[error("Product with title {title} and price {price} $ out of stock")]
    OutOfStock { title: String, price: Decimal },
    #[error("Product with title {title} and price {price} $ is not in the cart")]
    NotInCart { title: String, price: Decimal },
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
