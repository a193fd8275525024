use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::clients::ActorClient;
use crate::domain::{Good, GoodId, GoodRef};
use crate::good_actor::{GoodAction, GoodActionResult, GoodError};
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Client for interacting with the catalog actor.
#[derive(Clone)]
pub struct GoodClient {
    inner: ResourceClient<Good>,
}

impl GoodClient {
    pub fn new(inner: ResourceClient<Good>) -> Self {
        Self { inner }
    }

    /// Exact (title, price) lookup. Ties go to the lowest id.
    #[instrument(skip(self))]
    pub async fn find_by_title_and_price(&self, title: &str, price: Decimal) -> Result<Option<Good>, GoodError> {
        debug!("Sending request");
        let reference = GoodRef::new(title, price);
        let found = self
            .inner
            .find(move |good: &Good| good.matches(&reference))
            .await
            .map_err(Self::map_error)?;
        Ok(found.into_iter().min_by_key(|good| good.id))
    }

    #[allow(dead_code)]
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: GoodId) -> Result<u32, GoodError> {
        debug!("Sending request");
        match self.perform(id, GoodAction::CheckStock).await? {
            GoodActionResult::CheckStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    /// Takes `quantity` units out of stock, returning what is left.
    #[instrument(skip(self))]
    pub async fn reserve_stock(&self, id: GoodId, quantity: u32) -> Result<u32, GoodError> {
        debug!("Sending request");
        match self.perform(id, GoodAction::ReserveStock(quantity)).await? {
            GoodActionResult::ReserveStock(remaining) => Ok(remaining),
            other => Err(unexpected(other)),
        }
    }

    /// Puts `quantity` units back, returning the new stock level.
    #[instrument(skip(self))]
    pub async fn release_stock(&self, id: GoodId, quantity: u32) -> Result<u32, GoodError> {
        debug!("Sending request");
        match self.perform(id, GoodAction::ReleaseStock(quantity)).await? {
            GoodActionResult::ReleaseStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    async fn perform(&self, id: GoodId, action: GoodAction) -> Result<GoodActionResult, GoodError> {
        match self.inner.perform_action(id, action).await {
            Err(FrameworkError::NotFound(_)) => Err(GoodError::NotFound(id)),
            result => result.map_err(Self::map_error),
        }
    }
}

fn unexpected(result: GoodActionResult) -> GoodError {
    GoodError::ActorCommunicationError(format!("Unexpected result: {result:?}"))
}

impl ActorClient<Good> for GoodClient {
    type Error = GoodError;

    fn inner(&self) -> &ResourceClient<Good> {
        &self.inner
    }

    fn map_error(e: FrameworkError<GoodError>) -> Self::Error {
        match e {
            FrameworkError::Entity(e) => e,
            other => GoodError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_framework::{create_mock_client, expect_action, expect_find};
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn lookup_prefers_lowest_id() {
        let (inner, mut receiver) = create_mock_client::<Good>(10);
        let client = GoodClient::new(inner);

        let lookup = tokio::spawn(async move { client.find_by_title_and_price("Juice", dec!(2.00)).await });

        let (predicate, responder) = expect_find(&mut receiver).await.expect("Expected Find request");
        let small = Good::new(7, "Juice", dec!(2), 1, "small");
        let large = Good::new(4, "Juice", dec!(2), 3, "large");
        let book = Good::new(1, "Book", dec!(5.5), 1, "This is a book");
        assert!(predicate(&small));
        assert!(!predicate(&book));
        responder.send(Ok(vec![small, large])).unwrap();

        let found = lookup.await.unwrap().unwrap();
        assert_eq!(found.map(|good| good.id), Some(GoodId(4)));
    }

    #[tokio::test]
    async fn unknown_id_maps_to_not_found() {
        let (inner, mut receiver) = create_mock_client::<Good>(10);
        let client = GoodClient::new(inner);

        let reserve = tokio::spawn(async move { client.reserve_stock(GoodId(9), 1).await });

        let (id, action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert_eq!(id, GoodId(9));
        assert!(matches!(action, GoodAction::ReserveStock(1)));
        responder.send(Err(FrameworkError::NotFound(id.to_string()))).unwrap();

        assert_eq!(reserve.await.unwrap(), Err(GoodError::NotFound(GoodId(9))));
    }
}
