//! Storage backends for the todo collection.

mod mongo;

#[cfg(test)]
pub(crate) mod memory;

use async_trait::async_trait;
use strike_api::v1::TodoItem;
use thiserror::Error;
use uuid::Uuid;

pub use mongo::MongoStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("todo '{0}' not found")]
    NotFound(Uuid),
    #[error("storage backend error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A collection of todo documents keyed by id.
///
/// The store holds whatever it is given; shape validation happens in the
/// API layer before anything reaches a backend.
#[async_trait]
pub trait TodoStore: Send + Sync + 'static {
    async fn insert(&self, todo: &TodoItem) -> StoreResult<()>;

    /// Materializes the entire collection in backend-native order.
    async fn find_all(&self) -> StoreResult<Vec<TodoItem>>;

    async fn find(&self, id: Uuid) -> StoreResult<Option<TodoItem>>;

    /// Removes the todo, `NotFound` when no document matches.
    async fn delete(&self, id: Uuid) -> StoreResult<()>;

    /// Atomically flips `finished` and returns the new value, `NotFound`
    /// when no document matches.
    async fn toggle_finished(&self, id: Uuid) -> StoreResult<bool>;
}
