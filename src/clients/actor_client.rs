use crate::actor_framework::{Entity, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::debug;

/// Behaviour shared by every typed client.
#[async_trait]
pub trait ActorClient<T: Entity>: Send + Sync {
    type Error: Send;

    fn inner(&self) -> &ResourceClient<T>;

    fn map_error(e: FrameworkError<T::Error>) -> Self::Error;

    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        debug!(%id, "Sending get request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    async fn find_all(&self) -> Result<Vec<T>, Self::Error> {
        debug!("Sending find request");
        self.inner().find(|_| true).await.map_err(Self::map_error)
    }
}
