use crate::cart_actor::CartError;
use crate::config::ConfigError;
use crate::order_actor::OrderError;
use thiserror::Error;

/// Application-level failure, as returned from `main`.
#[derive(Debug, Error)]
pub enum ShopError {
    #[error(transparent)]
    Cart(#[from] CartError),
    #[error(transparent)]
    Order(#[from] OrderError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Actor task failed: {0}")]
    Shutdown(String),
}
