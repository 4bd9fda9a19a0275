//! CRUD HTTP service for todo items.
//!
//! # Overview
//! Three layers composed by hand in [`app`]: `handlers` (HTTP) → `service`
//! (rules, logging) → `repository` (SeaORM, soft delete). The schema comes
//! from the `migration` crate and is applied by [`db::connect`].

pub mod config;
pub mod db;
pub mod dto;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod repository;
pub mod routes;
pub mod service;

use std::future::Future;

use axum::Router;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;

pub use config::Config;
pub use dto::{CreateTodo, ErrorBody, TodoFilter, TodoView, UpdateTodo};
pub use error::{Error, StartupError};
pub use repository::Repository;
pub use service::TodoService;

/// Shared per-request state.
#[derive(Clone, Debug)]
pub struct AppState {
    pub todos: TodoService,
}

/// Wire repository → service → router over an already-migrated connection.
pub fn app(db: DatabaseConnection) -> Router {
    let todos = TodoService::new(Repository::new(db));
    routes::router(AppState { todos })
}

/// Serve until `shutdown` resolves.
pub async fn run<F>(
    listener: TcpListener,
    db: DatabaseConnection,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app(db))
        .with_graceful_shutdown(shutdown)
        .await
}
