//! Todo endpoints
//!
//! `/todos` and `/todos/` are both served, so clients of either spelling
//! reach the same list and create handlers.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::extract::{ListParams, Payload, TodoId};
use crate::model::{Todo, TodoCreate, TodoUpdate};
use crate::store::TodoStore;

/// Store handle shared by every handler.
pub type SharedStore = Arc<dyn TodoStore>;

pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/", get(list_todos).post(create_todo))
        .route(
            "/todos/{todo_id}",
            get(get_todo).put(update_todo).delete(delete_todo),
        )
        .with_state(store)
}

/// GET /health
async fn health(State(store): State<SharedStore>) -> ApiResult<Json<Value>> {
    let todos = store.list(None).await?.len();
    Ok(Json(json!({ "status": "ok", "todos": todos })))
}

/// GET /todos?first_n=
async fn list_todos(
    State(store): State<SharedStore>,
    params: ListParams,
) -> ApiResult<Json<Vec<Todo>>> {
    Ok(Json(store.list(params.first_n).await?))
}

/// GET /todos/{todo_id}
async fn get_todo(
    State(store): State<SharedStore>,
    TodoId(todo_id): TodoId,
) -> ApiResult<Json<Todo>> {
    Ok(Json(store.get(todo_id).await?))
}

/// POST /todos
async fn create_todo(
    State(store): State<SharedStore>,
    Payload(input): Payload<TodoCreate>,
) -> ApiResult<(StatusCode, Json<Todo>)> {
    input.validate()?;
    let todo = store.create(input).await?;
    tracing::info!(todo_id = todo.todo_id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

/// PUT /todos/{todo_id}
async fn update_todo(
    State(store): State<SharedStore>,
    TodoId(todo_id): TodoId,
    Payload(patch): Payload<TodoUpdate>,
) -> ApiResult<Json<Todo>> {
    patch.validate()?;
    Ok(Json(store.update(todo_id, patch).await?))
}

/// DELETE /todos/{todo_id}
async fn delete_todo(
    State(store): State<SharedStore>,
    TodoId(todo_id): TodoId,
) -> ApiResult<Json<Todo>> {
    let todo = store.delete(todo_id).await?;
    tracing::info!(todo_id, "deleted todo");
    Ok(Json(todo))
}
