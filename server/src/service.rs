//! Todo service: validation, pagination math, persistence calls.
//!
//! # Design
//! Every mutating operation performs exactly one store write; `list` does
//! one page query plus one count. Validation happens before any store
//! access, so a failed call never leaves a partial mutation behind.

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::error::ServiceError;
use crate::model::{Status, Todo};
use crate::repo::TodoRepo;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// Fields a caller may change on an existing todo. `status` stays a raw
/// string here so an unknown value surfaces as a validation error with a
/// precise message instead of a deserialization failure.
#[derive(Debug, Clone, Default)]
pub struct UpdateFields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// One page of todos plus the pagination descriptor, recomputed per query.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoPage {
    pub todos: Vec<Todo>,
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
    pub total_todos: u64,
}

#[derive(Debug, Clone, Default)]
pub struct TodoService {
    repo: TodoRepo,
}

impl TodoService {
    pub fn new(repo: TodoRepo) -> Self {
        Self { repo }
    }

    /// List one page of todos, newest first.
    ///
    /// `page` and `limit` arrive as raw query values; absent, non-numeric,
    /// and zero all fall back to the (1, 10) defaults. No upper bound is
    /// enforced on `limit`. Infallible against the in-memory store; a real
    /// persistence fault would surface as [`ServiceError::Internal`].
    pub async fn list(&self, page: Option<&str>, limit: Option<&str>) -> TodoPage {
        let page = parse_page_param(page, DEFAULT_PAGE);
        let limit = parse_page_param(limit, DEFAULT_LIMIT);
        let skip = (page - 1).saturating_mul(limit);

        let todos = self.repo.find_page(skip as usize, limit as usize).await;
        let total_todos = self.repo.count().await as u64;
        let total_pages = total_todos.div_ceil(limit);

        TodoPage {
            todos,
            page,
            limit,
            total_pages,
            total_todos,
        }
    }

    /// Create a todo with a trimmed title and trimmed-or-empty description.
    ///
    /// # Errors
    /// `Validation` when the title is absent or trims to empty; nothing is
    /// persisted in that case.
    pub async fn create(
        &self,
        title: Option<String>,
        description: Option<String>,
    ) -> Result<Todo, ServiceError> {
        let title = title.as_deref().map(str::trim).unwrap_or_default();
        if title.is_empty() {
            return Err(ServiceError::Validation("Title is required".to_string()));
        }
        let description = description.as_deref().map(str::trim).unwrap_or_default();

        let todo = Todo::new(title.to_string(), description.to_string());
        self.repo.insert(todo.clone()).await;
        debug!(id = %todo.id, "created todo");
        Ok(todo)
    }

    /// Apply the supplied fields to an existing todo and refresh
    /// `updated_at`. Omitted fields keep their prior values.
    ///
    /// # Errors
    /// `Validation` when a supplied title trims to empty or a supplied
    /// status is not one of the three accepted values (checked before any
    /// store access, so the record stays untouched); `NotFound` when the id
    /// does not resolve.
    pub async fn update(&self, id: Uuid, fields: UpdateFields) -> Result<Todo, ServiceError> {
        let title = match fields.title {
            Some(raw) => {
                let trimmed = raw.trim().to_string();
                if trimmed.is_empty() {
                    return Err(ServiceError::Validation("Title cannot be empty".to_string()));
                }
                Some(trimmed)
            }
            None => None,
        };
        let status = match fields.status.as_deref() {
            Some(raw) => Some(raw.parse::<Status>().map_err(|()| {
                ServiceError::Validation(
                    "Invalid status. Must be Pending, In-Progress, or Completed".to_string(),
                )
            })?),
            None => None,
        };
        let description = fields.description.map(|d| d.trim().to_string());

        let updated = self
            .repo
            .update_by_id(id, |todo| {
                if let Some(title) = title {
                    todo.title = title;
                }
                if let Some(description) = description {
                    todo.description = description;
                }
                if let Some(status) = status {
                    todo.status = status;
                }
                todo.updated_at = Utc::now();
            })
            .await
            .ok_or(ServiceError::NotFound)?;
        debug!(id = %id, "updated todo");
        Ok(updated)
    }

    /// Remove a todo by id. Hard delete, no payload on success.
    ///
    /// # Errors
    /// `NotFound` when the id does not resolve.
    pub async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if !self.repo.delete_by_id(id).await {
            return Err(ServiceError::NotFound);
        }
        debug!(id = %id, "deleted todo");
        Ok(())
    }
}

/// Absent, non-numeric, and zero values all fall back to the default.
fn parse_page_param(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|s| s.parse::<u64>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(default)
}
