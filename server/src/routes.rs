use axum::{routing::get, Router};

use crate::handlers::{create_todo, delete_todo, get_todo, list_todos, update_todo};
use crate::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route(
            "/api/todos/{id}",
            get(get_todo).patch(update_todo).delete(delete_todo),
        )
        .with_state(state)
}
