//! MongoDB-backed todo storage.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{self, doc},
    options::ReturnDocument,
    Client, Collection,
};
use serde::{Deserialize, Serialize};
use strike_api::v1::TodoItem;
use uuid::Uuid;

use super::{StoreError, StoreResult, TodoStore};

const DATABASE: &str = "todolist";
const COLLECTION: &str = "todos";

/// Shape of a todo document in the collection. The id is stored as `_id`
/// in the standard binary uuid representation, and a missing `finished`
/// field reads back as false.
#[derive(Debug, Serialize, Deserialize)]
struct TodoDocument {
    #[serde(rename = "_id", with = "bson::serde_helpers::uuid_1_as_binary")]
    id: Uuid,
    content: String,
    #[serde(default)]
    finished: bool,
}

impl From<&TodoItem> for TodoDocument {
    fn from(todo: &TodoItem) -> Self {
        Self {
            id: todo.id,
            content: todo.content.clone(),
            finished: todo.finished,
        }
    }
}

impl From<TodoDocument> for TodoItem {
    fn from(doc: TodoDocument) -> Self {
        Self {
            id: doc.id,
            content: doc.content,
            finished: doc.finished,
        }
    }
}

pub struct MongoStore {
    todos: Collection<TodoDocument>,
}

impl MongoStore {
    /// Connects to the backend and opens the todo collection.
    pub async fn connect(uri: &str) -> StoreResult<Self> {
        let client = Client::with_uri_str(uri).await?;
        let todos = client.database(DATABASE).collection(COLLECTION);

        Ok(Self { todos })
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        Self::Backend(err.to_string())
    }
}

#[async_trait]
impl TodoStore for MongoStore {
    async fn insert(&self, todo: &TodoItem) -> StoreResult<()> {
        self.todos.insert_one(TodoDocument::from(todo)).await?;
        Ok(())
    }

    async fn find_all(&self) -> StoreResult<Vec<TodoItem>> {
        let docs: Vec<TodoDocument> = self.todos.find(doc! {}).await?.try_collect().await?;
        Ok(docs.into_iter().map(TodoItem::from).collect())
    }

    async fn find(&self, id: Uuid) -> StoreResult<Option<TodoItem>> {
        let found = self
            .todos
            .find_one(doc! { "_id": bson::Uuid::from(id) })
            .await?;

        Ok(found.map(TodoItem::from))
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        let result = self
            .todos
            .delete_one(doc! { "_id": bson::Uuid::from(id) })
            .await?;

        if result.deleted_count == 0 {
            return Err(StoreError::NotFound(id));
        }

        Ok(())
    }

    async fn toggle_finished(&self, id: Uuid) -> StoreResult<bool> {
        // Pipeline update so the flip happens server-side in one operation;
        // concurrent toggles of the same id cannot lose an update.
        let flip = vec![doc! {
            "$set": { "finished": { "$not": [{ "$ifNull": ["$finished", false] }] } }
        }];

        let updated = self
            .todos
            .find_one_and_update(doc! { "_id": bson::Uuid::from(id) }, flip)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or(StoreError::NotFound(id))?;

        Ok(updated.finished)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_finished_field_reads_back_as_false() {
        let doc = doc! { "_id": bson::Uuid::new(), "content": "legacy" };
        let todo: TodoDocument = bson::from_document(doc).unwrap();

        assert!(!todo.finished);
    }

    #[test]
    fn id_round_trips_as_binary_uuid() {
        let todo = TodoDocument::from(&TodoItem::new(String::from("buy milk")));
        let doc = bson::to_document(&todo).unwrap();

        assert!(matches!(doc.get("_id"), Some(bson::Bson::Binary(_))));

        let back: TodoDocument = bson::from_document(doc).unwrap();
        assert_eq!(back.id, todo.id);
        assert_eq!(back.content, "buy milk");
    }
}
