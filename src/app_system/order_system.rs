use crate::actor_framework::ResourceActor;
use crate::clients::{CartClient, GoodClient, OrderClient};
use crate::config::ShopConfig;
use crate::domain::{Cart, Good, Order, OrderId};
use crate::app_system::ShopError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{error, info};

/// The main application system that orchestrates all actors.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct OrderSystem {
    pub good_client: GoodClient,
    pub cart_client: CartClient,
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    pub fn new(config: &ShopConfig) -> Self {
        let buffer_size = config.actors.buffer_size;

        // 1. Catalog, seeded from config and keyed by the configured ids
        let (good_actor, good_resource_client) = ResourceActor::<Good>::keyed(buffer_size);
        let good_client = GoodClient::new(good_resource_client);
        let good_handle = tokio::spawn(good_actor.with_entities(config.catalog.clone()).run());

        // 2. Carts, keyed by buyer
        let (cart_actor, cart_resource_client) = ResourceActor::<Cart>::keyed(buffer_size);
        let cart_client = CartClient::new(cart_resource_client, good_client.clone());
        let cart_handle = tokio::spawn(cart_actor.run());

        // 3. Orders
        let order_id_counter = Arc::new(AtomicU64::new(1));
        let next_order_id = move || OrderId(order_id_counter.fetch_add(1, Ordering::SeqCst));
        let (order_actor, order_resource_client) = ResourceActor::<Order>::new(buffer_size, next_order_id);
        let order_client = OrderClient::new(order_resource_client, cart_client.clone());
        let order_handle = tokio::spawn(order_actor.run());

        info!(goods = config.catalog.len(), buffer_size, "Order system started");

        Self {
            good_client,
            cart_client,
            order_client,
            handles: vec![good_handle, cart_handle, order_handle],
        }
    }

    pub async fn shutdown(self) -> Result<(), ShopError> {
        info!("Shutting down system...");
        // Actors stop once every client (and clone) holding their channel is gone.
        drop(self.order_client);
        drop(self.cart_client);
        drop(self.good_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(ShopError::Shutdown(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
