mod domain;
mod clients;
mod config;

mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod cart_actor;
mod good_actor;
mod order_actor;

use crate::app_system::{setup_tracing, OrderSystem, ShopError};
use crate::config::ShopConfig;
use crate::domain::{BuyerId, GoodRef, OrderId};
use rust_decimal_macros::dec;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), ShopError> {
    let config = ShopConfig::load().await?;

    // Setup tracing once for the entire application
    setup_tracing(&config.logging.filter);

    info!(goods = config.catalog.len(), "Starting order system");

    let system = OrderSystem::new(&config);
    let buyer = BuyerId::from("asya_mogilev@yopmail.com");

    let span = tracing::info_span!("filling_cart", buyer = %buyer);
    let lines = async {
        system.cart_client.add_good(&buyer, GoodRef::new("Juice", dec!(2))).await?;
        system.cart_client.add_good(&buyer, GoodRef::new("Book", dec!(5.5))).await
    }
    .instrument(span)
    .await?;
    info!(lines = lines.len(), "Cart filled");

    let span = tracing::info_span!("order_processing", buyer = %buyer);
    let order = async {
        info!("Submitting pending order");
        system.order_client.submit(&buyer).await
    }
    .instrument(span)
    .await?;

    match serde_json::to_string_pretty(&order) {
        Ok(json) => info!(order_id = %order.id, "Order submitted:\n{json}"),
        Err(e) => warn!(error = %e, "Order could not be rendered"),
    }

    let cart = system.cart_client.cart(&buyer).await?;
    info!(status = ?cart.status(), lines = cart.lines.len(), "Cart after submit");

    let stored = system.order_client.get_by_id(order.id).await?;
    info!(order_id = %stored.id, total = %stored.total_price, "Order read back");

    let listing = system.order_client.list_all(&config.listing.query()?).await?;
    let stored_orders = system.order_client.order_count().await?;
    info!(shown = listing.len(), stored = stored_orders, "Admin listing");
    for view in &listing {
        info!(order_id = %view.id, buyer = %view.buyer, total = %view.total_price, "Listed order");
    }

    // Failures a client sees
    let span = tracing::info_span!("rejected_requests", buyer = %buyer);
    async {
        if let Err(e) = system.cart_client.add_good(&buyer, GoodRef::new("Juice", dec!(2))).await {
            error!(error = %e, "Add rejected");
        }
        if let Err(e) = system.cart_client.remove_good(&buyer, GoodRef::new("Phone", dec!(200))).await {
            error!(error = %e, "Remove rejected");
        }
        if let Err(e) = system.order_client.submit(&buyer).await {
            error!(error = %e, "Submit rejected");
        }
        if let Err(e) = system.order_client.get_by_id(OrderId(order.id.0 + 1)).await {
            error!(error = %e, "Lookup failed");
        }
        if let Err(e) = system.order_client.amend(order.id).await {
            error!(error = %e, "Amend rejected");
        }
    }
    .instrument(span)
    .await;

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
