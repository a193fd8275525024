use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument};

// =============================================================================
// 1. THE ABSTRACTION (Entity trait, lifecycle hooks, actions)
// =============================================================================

/// Trait that any domain entity must implement to be managed by [`ResourceActor`].
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + 'static;
    type CreateParams: Send + Sync + Debug + 'static;
    type Action: Send + Sync + Debug + 'static;
    type ActionResult: Send + Sync + Debug + 'static;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and creation parameters
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, Self::Error>;

    /// Entity to materialize when an action targets an id the store does not hold.
    ///
    /// Returning `None` (the default) makes such actions fail with
    /// [`FrameworkError::NotFound`]. The materialized entity is only stored if
    /// the action succeeds.
    fn on_missing(_id: &Self::Id) -> Option<Self> {
        None
    }

    /// Whether the entity holds nothing worth keeping. A vacant entity is
    /// removed from the store instead of committed after a successful action.
    fn is_vacant(&self) -> bool {
        false
    }

    /// Handle a custom domain-specific action.
    ///
    /// The actor runs this against a copy of the stored entity and commits the
    /// copy only when it returns `Ok`.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}

/// Failures reported by a [`ResourceClient`].
#[derive(Debug, Error)]
pub enum FrameworkError<E> {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Actor has no id generator")]
    NoIdGenerator,
    #[error("{0}")]
    Entity(E),
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T, E> = oneshot::Sender<Result<T, FrameworkError<E>>>;

/// Filter applied inside the actor for [`ResourceRequest::Find`].
pub type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T::Id, T::Error>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>, T::Error>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<(), T::Error>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult, T::Error>,
    },
    Find {
        predicate: Predicate<T>,
        respond_to: Response<Vec<T>, T::Error>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Owns every entity of one type and serves requests one at a time.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Option<Box<dyn Fn() -> T::Id + Send + Sync>>,
}

impl<T: Entity> ResourceActor<T> {
    /// Actor whose entities are created through [`ResourceClient::create`].
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        Self::build(buffer_size, Some(Box::new(next_id_fn)))
    }

    /// Actor whose ids come from callers; entities appear through
    /// [`Entity::on_missing`] or seeding.
    pub fn keyed(buffer_size: usize) -> (Self, ResourceClient<T>) {
        Self::build(buffer_size, None)
    }

    fn build(
        buffer_size: usize,
        next_id_fn: Option<Box<dyn Fn() -> T::Id + Send + Sync>>,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Preloads entities before the actor starts serving.
    pub fn with_entities(mut self, entities: impl IntoIterator<Item = T>) -> Self {
        for entity in entities {
            self.store.insert(entity.id().clone(), entity);
        }
        self
    }

    #[instrument(name = "resource_actor", skip(self), fields(entity = std::any::type_name::<T>()))]
    pub async fn run(mut self) {
        info!(entries = self.store.len(), "Actor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => self.handle_create(params, respond_to),
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.get(&id).cloned()));
                }
                ResourceRequest::Delete { id, respond_to } => self.handle_delete(id, respond_to),
                ResourceRequest::Action { id, action, respond_to } => {
                    self.handle_action(id, action, respond_to)
                }
                ResourceRequest::Find { predicate, respond_to } => {
                    let found = self.store.values().filter(|&item| predicate(item)).cloned().collect();
                    let _ = respond_to.send(Ok(found));
                }
            }
        }
        info!("Actor stopped");
    }

    fn handle_create(&mut self, params: T::CreateParams, respond_to: Response<T::Id, T::Error>) {
        let Some(next_id) = &self.next_id_fn else {
            let _ = respond_to.send(Err(FrameworkError::NoIdGenerator));
            return;
        };
        let id = next_id();
        let result = match T::from_create_params(id.clone(), params) {
            Ok(item) => {
                debug!(%id, "Entity created");
                self.store.insert(id.clone(), item);
                Ok(id)
            }
            Err(e) => Err(FrameworkError::Entity(e)),
        };
        let _ = respond_to.send(result);
    }

    fn handle_delete(&mut self, id: T::Id, respond_to: Response<(), T::Error>) {
        let result = match self.store.remove(&id) {
            Some(_) => Ok(()),
            None => Err(FrameworkError::NotFound(id.to_string())),
        };
        let _ = respond_to.send(result);
    }

    fn handle_action(
        &mut self,
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult, T::Error>,
    ) {
        let Some(mut draft) = self.store.get(&id).cloned().or_else(|| T::on_missing(&id)) else {
            let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
            return;
        };

        let result = match draft.handle_action(action) {
            Ok(outcome) => {
                if draft.is_vacant() {
                    self.store.remove(&id);
                } else {
                    self.store.insert(id, draft);
                }
                Ok(outcome)
            }
            Err(e) => {
                debug!(%id, error = %e, "Action rejected");
                Err(FrameworkError::Entity(e))
            }
        };
        let _ = respond_to.send(result);
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R, T::Error>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError<T::Error>> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError<T::Error>> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }

    pub async fn find(
        &self,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
    ) -> Result<Vec<T>, FrameworkError<T::Error>> {
        let predicate: Predicate<T> = Box::new(predicate);
        self.request(|respond_to| ResourceRequest::Find { predicate, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
