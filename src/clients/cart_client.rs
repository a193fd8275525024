use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::clients::ActorClient;
use crate::clients::GoodClient;
use crate::domain::{BuyerId, Cart, CartLine, GoodRef};
use crate::good_actor::GoodError;
use tracing::{debug, error, info, instrument, warn};

/// Client for the buyers' carts.
///
/// Adding and removing goods spans the cart and catalog actors: the stock
/// check happens first, and if the second step fails for an infrastructure
/// reason the first is undone.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
    good_client: GoodClient,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>, good_client: GoodClient) -> Self {
        Self { inner, good_client }
    }

    #[instrument(skip(self, good), fields(buyer = %buyer, title = %good.title, price = %good.price))]
    pub async fn add_good(&self, buyer: &BuyerId, good: GoodRef) -> Result<Vec<CartLine>, CartError> {
        info!("Processing add_good request");
        let units = good.units();
        let out_of_stock = || CartError::OutOfStock {
            title: good.title.clone(),
            price: good.price,
        };

        // Step 1: Locate the catalog good
        let catalog_good = match self.good_client.find_by_title_and_price(&good.title, good.price).await {
            Ok(Some(found)) => found,
            Ok(None) => {
                warn!("Good not in catalog");
                return Err(out_of_stock());
            }
            Err(e) => {
                error!(error = %e, "Catalog lookup failed");
                return Err(CartError::ActorCommunicationError(e.to_string()));
            }
        };

        // Step 2: Reserve stock
        match self.good_client.reserve_stock(catalog_good.id, units).await {
            Ok(remaining) => info!(good_id = %catalog_good.id, remaining, "Stock reserved"),
            Err(GoodError::InsufficientStock { requested, available }) => {
                warn!(requested, available, "Insufficient stock");
                return Err(out_of_stock());
            }
            Err(GoodError::NotFound(_)) => return Err(out_of_stock()),
            Err(e) => {
                error!(error = %e, "Stock reservation failed");
                return Err(CartError::ActorCommunicationError(e.to_string()));
            }
        }

        // Step 3: Put the line in the buyer's cart
        let line = CartLine::from_good(&catalog_good, units);
        let failure = match self.inner.perform_action(buyer.clone(), CartAction::Add(line)).await {
            Ok(CartActionResult::Lines(lines)) => {
                info!(lines = lines.len(), "Good added to cart");
                return Ok(lines);
            }
            Ok(other) => unexpected(other),
            Err(e) => Self::map_error(e),
        };

        error!(error = %failure, "Cart update failed, releasing stock");
        if let Err(e) = self.good_client.release_stock(catalog_good.id, units).await {
            error!(error = %e, good_id = %catalog_good.id, units, "Stock release failed");
        }
        Err(failure)
    }

    #[instrument(skip(self, good), fields(buyer = %buyer, title = %good.title, price = %good.price))]
    pub async fn remove_good(&self, buyer: &BuyerId, good: GoodRef) -> Result<Vec<CartLine>, CartError> {
        info!("Processing remove_good request");

        // Step 1: Take the units out of the cart
        let (removed, position, lines) = match self.inner.perform_action(buyer.clone(), CartAction::Remove(good)).await {
            Ok(CartActionResult::Removed {
                removed,
                position,
                lines,
            }) => (removed, position, lines),
            Ok(other) => return Err(unexpected(other)),
            Err(e) => {
                let e = Self::map_error(e);
                warn!(error = %e, "Removal rejected");
                return Err(e);
            }
        };

        // Step 2: Give them back to the catalog
        match self.good_client.release_stock(removed.good_id, removed.quantity).await {
            Ok(stock) => {
                info!(good_id = %removed.good_id, stock, "Stock restored");
                Ok(lines)
            }
            Err(e) => {
                error!(error = %e, "Stock release failed, returning units to cart");
                let reinsert = CartAction::Reinsert { line: removed, position };
                if let Err(restore) = self.inner.perform_action(buyer.clone(), reinsert).await {
                    error!(error = %restore, "Cart restore failed");
                }
                Err(CartError::ActorCommunicationError(e.to_string()))
            }
        }
    }

    /// The buyer's pending order; empty if nothing was ever added.
    #[instrument(skip(self))]
    pub async fn cart(&self, buyer: &BuyerId) -> Result<Cart, CartError> {
        let cart = self.get(buyer.clone()).await?.unwrap_or_else(|| Cart::new(buyer.clone()));
        debug!(status = ?cart.status(), lines = cart.lines.len(), "Cart loaded");
        Ok(cart)
    }

    /// Empties the cart in one step and returns what it held.
    #[instrument(skip(self))]
    pub(crate) async fn take_all(&self, buyer: &BuyerId) -> Result<Vec<CartLine>, CartError> {
        debug!("Sending request");
        match self.inner.perform_action(buyer.clone(), CartAction::TakeAll).await {
            Ok(CartActionResult::Taken(lines)) => Ok(lines),
            Ok(other) => Err(unexpected(other)),
            Err(e) => Err(Self::map_error(e)),
        }
    }

    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    pub(crate) async fn restore(&self, buyer: &BuyerId, lines: Vec<CartLine>) -> Result<(), CartError> {
        debug!("Sending request");
        match self.inner.perform_action(buyer.clone(), CartAction::Restore(lines)).await {
            Ok(CartActionResult::Lines(_)) => Ok(()),
            Ok(other) => Err(unexpected(other)),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

fn unexpected(result: CartActionResult) -> CartError {
    CartError::ActorCommunicationError(format!("Unexpected result: {result:?}"))
}

impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError<CartError>) -> Self::Error {
        match e {
            FrameworkError::Entity(e) => e,
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}
