use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::clients::ActorClient;
use crate::clients::CartClient;
use crate::domain::{BuyerId, Order, OrderAdminView, OrderCreate, OrderId};
use crate::order_actor::{OrderError, OrderQuery};
use chrono::Utc;
use tracing::{debug, error, info, instrument, warn};

/// Client for interacting with the Order actor.
///
/// Submission takes the buyer's cart and freezes it into an order; lookups
/// and the admin listing read from the order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    cart_client: CartClient,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, cart_client: CartClient) -> Self {
        Self { inner, cart_client }
    }

    #[instrument(skip(self), fields(buyer = %buyer))]
    pub async fn submit(&self, buyer: &BuyerId) -> Result<Order, OrderError> {
        info!("Processing submit request");

        // Step 1: Empty the cart
        let goods = self
            .cart_client
            .take_all(buyer)
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;
        if goods.is_empty() {
            warn!("Cart is empty");
            return Err(OrderError::EmptyOrder);
        }

        // Step 2: Store the snapshot
        let params = OrderCreate {
            buyer: buyer.clone(),
            goods: goods.clone(),
            created_at: Utc::now(),
        };
        let id = match self.inner.create(params).await {
            Ok(id) => id,
            Err(e) => {
                let e = Self::map_error(e);
                error!(error = %e, "Order creation failed, restoring cart");
                if let Err(restore) = self.cart_client.restore(buyer, goods).await {
                    error!(error = %restore, "Cart restore failed");
                }
                return Err(e);
            }
        };

        let order = self.get_by_id(id).await?;
        info!(order_id = %order.id, total = %order.total_price, "Order submitted");
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: OrderId) -> Result<Order, OrderError> {
        debug!("Sending request");
        match self.get(id).await? {
            Some(order) => {
                debug!(total = %order.total_price, "Order found");
                Ok(order)
            }
            None => {
                debug!("Order not found");
                Err(OrderError::NotFound(id))
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self, query: &OrderQuery) -> Result<Vec<OrderAdminView>, OrderError> {
        debug!("Sending request");
        let filter = query.clone();
        let matching = self
            .inner
            .find(move |order: &Order| filter.matches(order))
            .await
            .map_err(Self::map_error)?;
        let page = query.page(matching);
        info!(returned = page.len(), "Orders listed");
        Ok(page)
    }

    /// Number of stored orders.
    #[instrument(skip(self))]
    pub async fn order_count(&self) -> Result<usize, OrderError> {
        Ok(self.find_all().await?.len())
    }

    /// Removes a stored order. Only meant for cleanup.
    #[allow(dead_code)]
    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: OrderId) -> Result<(), OrderError> {
        debug!("Sending request");
        match self.inner.delete(id).await {
            Err(FrameworkError::NotFound(_)) => Err(OrderError::NotFound(id)),
            result => result.map_err(Self::map_error),
        }
    }

    /// Any attempt to change a stored order; always refused.
    #[instrument(skip(self))]
    pub async fn amend(&self, id: OrderId) -> Result<(), OrderError> {
        match self.inner.perform_action(id, ()).await {
            Err(FrameworkError::NotFound(_)) => Err(OrderError::NotFound(id)),
            result => result.map_err(Self::map_error),
        }
    }
}

impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError<OrderError>) -> Self::Error {
        match e {
            FrameworkError::Entity(e) => e,
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
