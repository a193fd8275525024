//! Clients for the resource actors.
//!
//! Each client wraps a [`ResourceClient`](crate::actor_framework::ResourceClient),
//! maps framework failures to its domain error and, where an operation spans
//! several actors, orchestrates the steps.

pub mod actor_client;
pub mod cart_client;
pub mod good_client;
pub mod order_client;

pub use actor_client::ActorClient;
pub use cart_client::CartClient;
pub use good_client::GoodClient;
pub use order_client::OrderClient;
