//! HTTP surface: maps method+path pairs onto service operations.
//!
//! # Design
//! Pure dispatch — no business logic lives here. Request DTOs keep `title`
//! and `status` as optional raw strings so missing or invalid values reach
//! the service's validation (400 with a precise message) instead of failing
//! JSON extraction with a 422.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ServiceError;
use crate::model::Todo;
use crate::service::{TodoService, UpdateFields};

/// Raw list query values; bad numbers fall back to the service defaults
/// rather than failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
    pub total_todos: u64,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub success: bool,
    pub data: Vec<Todo>,
    pub pagination: Pagination,
}

#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub success: bool,
    pub data: Todo,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

pub async fn list_todos(
    State(service): State<TodoService>,
    Query(query): Query<ListQuery>,
) -> Json<ListResponse> {
    let page = service
        .list(query.page.as_deref(), query.limit.as_deref())
        .await;
    Json(ListResponse {
        success: true,
        data: page.todos,
        pagination: Pagination {
            page: page.page,
            limit: page.limit,
            total_pages: page.total_pages,
            total_todos: page.total_todos,
        },
    })
}

pub async fn create_todo(
    State(service): State<TodoService>,
    Json(body): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoResponse>), ServiceError> {
    let todo = service.create(body.title, body.description).await?;
    Ok((
        StatusCode::CREATED,
        Json(TodoResponse {
            success: true,
            data: todo,
            message: "Todo created successfully".to_string(),
        }),
    ))
}

pub async fn update_todo(
    State(service): State<TodoService>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateTodoRequest>,
) -> Result<Json<TodoResponse>, ServiceError> {
    let fields = UpdateFields {
        title: body.title,
        description: body.description,
        status: body.status,
    };
    let todo = service.update(id, fields).await?;
    Ok(Json(TodoResponse {
        success: true,
        data: todo,
        message: "Todo updated successfully".to_string(),
    }))
}

pub async fn delete_todo(
    State(service): State<TodoService>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ServiceError> {
    service.delete(id).await?;
    Ok(Json(MessageResponse {
        success: true,
        message: "Todo deleted successfully".to_string(),
    }))
}
