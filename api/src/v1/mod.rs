use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo item, as stored and as returned on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: Uuid,
    pub content: String,
    pub finished: bool,
}

impl TodoItem {
    /// New items get a fresh id and always start unfinished.
    pub fn new(content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            finished: false,
        }
    }
}

/// Body of `POST /todos`.
///
/// The `finished` flag is accepted for compatibility but ignored by the
/// server, which creates every item unfinished.
#[derive(Clone, Debug, Deserialize)]
pub struct CreateTodo {
    pub content: String,
    #[serde(default)]
    pub finished: bool,
}

/// Body of a successful `PATCH /todos/{id}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub id: Uuid,
    pub finished: bool,
}

/// Body of a successful `DELETE /todos/{id}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Body of any error response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
