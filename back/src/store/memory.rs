//! In-memory todo storage, the backend used by tests.

use std::collections::HashMap;

use async_trait::async_trait;
use strike_api::v1::TodoItem;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{StoreError, StoreResult, TodoStore};

#[derive(Default)]
pub(crate) struct MemoryStore {
    todos: Mutex<HashMap<Uuid, TodoItem>>,
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn insert(&self, todo: &TodoItem) -> StoreResult<()> {
        self.todos.lock().await.insert(todo.id, todo.clone());
        Ok(())
    }

    async fn find_all(&self) -> StoreResult<Vec<TodoItem>> {
        Ok(self.todos.lock().await.values().cloned().collect())
    }

    async fn find(&self, id: Uuid) -> StoreResult<Option<TodoItem>> {
        Ok(self.todos.lock().await.get(&id).cloned())
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        match self.todos.lock().await.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(id)),
        }
    }

    async fn toggle_finished(&self, id: Uuid) -> StoreResult<bool> {
        // single guard across read and write, so the flip is atomic
        let mut todos = self.todos.lock().await;
        let todo = todos.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        todo.finished = !todo.finished;

        Ok(todo.finished)
    }
}
