//! REST backend for the todo tracker.
//!
//! # Overview
//! Three layers: an in-memory document store ([`repo::TodoRepo`]), the todo
//! service with all validation and pagination math ([`service::TodoService`]),
//! and a thin axum routing surface ([`routes`]). `app()` wires a fresh store,
//! so every test gets isolated state; `run()` serves on a caller-provided
//! listener.

pub mod error;
pub mod model;
pub mod repo;
pub mod routes;
pub mod service;

use axum::{
    routing::{get, put},
    Router,
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub use error::ServiceError;
pub use model::{Status, Todo};
pub use repo::TodoRepo;
pub use service::{TodoPage, TodoService, UpdateFields};

use routes::{create_todo, delete_todo, list_todos, update_todo};

/// Build the application router over a fresh in-memory store.
pub fn app() -> Router {
    let service = TodoService::new(TodoRepo::new());
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", put(update_todo).delete(delete_todo))
        .layer(CorsLayer::permissive())
        .with_state(service)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}
