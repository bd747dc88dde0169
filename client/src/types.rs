//! Domain DTOs and response envelopes for the todo API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently, so
//! the client crate never links against server internals. The integration
//! tests, which run both crates together, catch any schema drift.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a todo. Wire strings are case-sensitive and exactly
/// `Pending`, `In-Progress`, `Completed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Pending,
    #[serde(rename = "In-Progress")]
    InProgress,
    Completed,
}

/// A single todo record returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request payload for updating an existing todo. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

/// Pagination descriptor accompanying every list response, recomputed by the
/// server on each query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
    pub total_todos: u64,
}

/// Envelope for `GET /todos`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse {
    pub success: bool,
    pub data: Vec<Todo>,
    pub pagination: Pagination,
}

/// Envelope for `POST /todos` and `PUT /todos/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct TodoResponse {
    pub success: bool,
    pub data: Todo,
    pub message: String,
}

/// Envelope for `DELETE /todos/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}
