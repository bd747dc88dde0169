//! In-memory document store for todo records.
//!
//! # Design
//! Stands in for the external document database. The service only relies on
//! the operations below — ordered skip/limit page query, count, insert,
//! update-by-id, delete-by-id — so a real store can replace this one without
//! touching the service or routes.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::model::Todo;

/// Shared handle to the document map. Cloning is cheap and all clones see
/// the same records.
#[derive(Debug, Clone, Default)]
pub struct TodoRepo {
    docs: Arc<RwLock<HashMap<Uuid, Todo>>>,
}

impl TodoRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// One page of records ordered by `created_at` descending (newest first).
    pub async fn find_page(&self, skip: usize, limit: usize) -> Vec<Todo> {
        let docs = self.docs.read().await;
        let mut todos: Vec<Todo> = docs.values().cloned().collect();
        todos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        todos.into_iter().skip(skip).take(limit).collect()
    }

    pub async fn count(&self) -> usize {
        self.docs.read().await.len()
    }

    pub async fn insert(&self, todo: Todo) {
        self.docs.write().await.insert(todo.id, todo);
    }

    /// Apply `mutate` to the record under a single write lock and return the
    /// updated copy, or `None` when the id is unknown.
    pub async fn update_by_id(&self, id: Uuid, mutate: impl FnOnce(&mut Todo)) -> Option<Todo> {
        let mut docs = self.docs.write().await;
        let todo = docs.get_mut(&id)?;
        mutate(todo);
        Some(todo.clone())
    }

    /// Remove the record; `true` when something was actually deleted.
    pub async fn delete_by_id(&self, id: Uuid) -> bool {
        self.docs.write().await.remove(&id).is_some()
    }
}
