use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use strike_api::v1::{CreateTodo, DeleteResponse, ErrorResponse, TodoItem, ToggleResponse};
use tracing::info;
use uuid::Uuid;

use crate::store::{StoreError, TodoStore};

type ApiError = (StatusCode, Json<ErrorResponse>);

pub fn router<S: TodoStore>() -> Router<Arc<S>> {
    Router::new()
        .route("/todos", get(get_todos::<S>).post(add_todo::<S>))
        .route("/todos/:id", delete(delete_todo::<S>).patch(toggle_todo::<S>))
}

async fn get_todos<S: TodoStore>(
    State(store): State<Arc<S>>,
) -> Result<Json<Vec<TodoItem>>, ApiError> {
    let todos = store.find_all().await.map_err(internal_error)?;
    Ok(Json(todos))
}

async fn add_todo<S: TodoStore>(
    State(store): State<Arc<S>>,
    Json(req): Json<CreateTodo>,
) -> Result<Json<TodoItem>, ApiError> {
    // any caller-supplied finished flag is ignored, new items start unfinished
    let todo = TodoItem::new(req.content);
    store.insert(&todo).await.map_err(internal_error)?;

    info!(
        id = %todo.id,
        content = %todo.content,
        "created todo"
    );

    Ok(Json(todo))
}

async fn delete_todo<S: TodoStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    store.delete(id).await.map_err(|err| match err {
        StoreError::NotFound(_) => not_found(id),
        other => internal_error(other),
    })?;

    info!(id = %id, "deleted todo");

    Ok(Json(DeleteResponse {
        message: String::from("Todo deleted successfully"),
    }))
}

async fn toggle_todo<S: TodoStore>(
    State(store): State<Arc<S>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ToggleResponse>, ApiError> {
    let finished = store.toggle_finished(id).await.map_err(|err| match err {
        StoreError::NotFound(_) => not_found(id),
        other => internal_error(other),
    })?;

    info!(id = %id, finished, "toggled todo");

    Ok(Json(ToggleResponse { id, finished }))
}

fn not_found(id: Uuid) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: format!("Todo '{id}' not found"),
        }),
    )
}

fn internal_error(err: StoreError) -> ApiError {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}
