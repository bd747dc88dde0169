//! Client-side todo store: a single-writer, reducer-style state container.
//!
//! # Design
//! [`TodoState`] is owned by exactly one writer and advances only through
//! [`TodoState::apply`], a pure transition function over [`TodoEvent`]. The
//! events are the begin/success/failure lifecycles of the four gateway
//! operations plus two standalone transitions (page change, error clear):
//!
//! | Event | Effect |
//! |---|---|
//! | `ListStarted` / `CreateStarted` / `UpdateStarted` / `DeleteStarted` | `loading = true`, error cleared |
//! | `ListSucceeded` | items and pagination fields replaced from the response |
//! | `CreateSucceeded` | no local insert — the caller triggers a follow-up list so the paginated view reflects server-side ordering |
//! | `UpdateSucceeded` | the matching item (same id) replaced in place when present |
//! | `DeleteSucceeded` | returns [`Followup::RefetchList`] to resynchronize the view (deleting the last item on a page can shrink the page count) |
//! | `*Failed(message)` | `loading = false`, `error = Some(message)` |
//! | `PageChanged(n)` | sets `current_page` only; listing is the caller's move |
//! | `ErrorCleared` | clears `error` only |
//!
//! Updates patch locally because an update can never change record ordering
//! or page membership (ordering is by creation time, which updates never
//! touch). Create and delete can, so those resynchronize via a full refetch.
//!
//! There is no request fencing or cancellation: overlapping operations may
//! interleave, and the last event applied wins.

use crate::types::{ListResponse, Todo};

/// In-memory mirror of the server's list state plus UI status flags.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoState {
    /// The last successfully fetched page, newest first.
    pub items: Vec<Todo>,
    pub loading: bool,
    /// At most one error message at a time; replaced by later failures,
    /// cleared by `ErrorCleared` or any subsequent begin.
    pub error: Option<String>,
    pub current_page: u64,
    pub limit: u64,
    pub total_pages: u64,
    pub total_todos: u64,
}

impl Default for TodoState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            current_page: 1,
            limit: 10,
            total_pages: 1,
            total_todos: 0,
        }
    }
}

/// Everything that can advance the store.
#[derive(Debug, Clone)]
pub enum TodoEvent {
    ListStarted,
    ListSucceeded(ListResponse),
    ListFailed(String),
    CreateStarted,
    /// The created record; not inserted locally — see the module docs.
    CreateSucceeded(Todo),
    CreateFailed(String),
    UpdateStarted,
    UpdateSucceeded(Todo),
    UpdateFailed(String),
    DeleteStarted,
    DeleteSucceeded,
    DeleteFailed(String),
    PageChanged(u64),
    ErrorCleared,
}

/// Compensating action the caller must execute after applying an event.
///
/// Making the post-delete refetch an explicit return value (instead of a
/// side effect hidden inside the store) keeps the ordering guarantee — the
/// mutation completes, then the list view resynchronizes — part of the
/// store's contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Followup {
    RefetchList { page: u64, limit: u64 },
}

impl TodoState {
    /// Advance the store by one event and return any compensating action.
    pub fn apply(&mut self, event: TodoEvent) -> Option<Followup> {
        match event {
            TodoEvent::ListStarted
            | TodoEvent::CreateStarted
            | TodoEvent::UpdateStarted
            | TodoEvent::DeleteStarted => {
                self.loading = true;
                self.error = None;
                None
            }
            TodoEvent::ListSucceeded(response) => {
                self.loading = false;
                self.error = None;
                self.items = response.data;
                self.current_page = response.pagination.page;
                self.total_pages = response.pagination.total_pages;
                self.total_todos = response.pagination.total_todos;
                None
            }
            TodoEvent::CreateSucceeded(_) => {
                self.loading = false;
                self.error = None;
                None
            }
            TodoEvent::UpdateSucceeded(updated) => {
                self.loading = false;
                self.error = None;
                if let Some(item) = self.items.iter_mut().find(|t| t.id == updated.id) {
                    *item = updated;
                }
                None
            }
            TodoEvent::DeleteSucceeded => {
                self.loading = false;
                self.error = None;
                Some(Followup::RefetchList {
                    page: self.current_page,
                    limit: self.limit,
                })
            }
            TodoEvent::ListFailed(message)
            | TodoEvent::CreateFailed(message)
            | TodoEvent::UpdateFailed(message)
            | TodoEvent::DeleteFailed(message) => {
                self.loading = false;
                self.error = Some(message);
                None
            }
            TodoEvent::PageChanged(page) => {
                self.current_page = page;
                None
            }
            TodoEvent::ErrorCleared => {
                self.error = None;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Pagination, Status};
    use chrono::Utc;
    use uuid::Uuid;

    fn todo(title: &str) -> Todo {
        let now = Utc::now();
        Todo {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: String::new(),
            status: Status::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    fn list_response(items: Vec<Todo>, page: u64, total_pages: u64, total_todos: u64) -> ListResponse {
        ListResponse {
            success: true,
            data: items,
            pagination: Pagination {
                page,
                limit: 10,
                total_pages,
                total_todos,
            },
        }
    }

    #[test]
    fn begin_sets_loading_and_clears_error() {
        for event in [
            TodoEvent::ListStarted,
            TodoEvent::CreateStarted,
            TodoEvent::UpdateStarted,
            TodoEvent::DeleteStarted,
        ] {
            let mut state = TodoState {
                error: Some("stale".to_string()),
                ..Default::default()
            };
            assert_eq!(state.apply(event), None);
            assert!(state.loading);
            assert_eq!(state.error, None);
        }
    }

    #[test]
    fn list_success_replaces_items_and_pagination() {
        let mut state = TodoState::default();
        state.apply(TodoEvent::ListStarted);

        let items = vec![todo("C"), todo("B"), todo("A")];
        state.apply(TodoEvent::ListSucceeded(list_response(items, 2, 3, 25)));

        assert!(!state.loading);
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.current_page, 2);
        assert_eq!(state.total_pages, 3);
        assert_eq!(state.total_todos, 25);
    }

    #[test]
    fn create_success_does_not_insert_locally() {
        let mut state = TodoState::default();
        state.apply(TodoEvent::CreateStarted);

        let followup = state.apply(TodoEvent::CreateSucceeded(todo("new")));
        assert_eq!(followup, None);
        assert!(state.items.is_empty());
        assert!(!state.loading);
    }

    #[test]
    fn update_success_replaces_matching_item_in_place() {
        let a = todo("A");
        let b = todo("B");
        let mut state = TodoState {
            items: vec![b.clone(), a.clone()],
            ..Default::default()
        };

        let mut changed = b.clone();
        changed.status = Status::Completed;
        state.apply(TodoEvent::UpdateSucceeded(changed));

        assert_eq!(state.items[0].id, b.id);
        assert_eq!(state.items[0].status, Status::Completed);
        assert_eq!(state.items[1], a);
    }

    #[test]
    fn update_success_for_item_off_page_changes_nothing() {
        let mut state = TodoState {
            items: vec![todo("A")],
            ..Default::default()
        };
        let before = state.items.clone();

        state.apply(TodoEvent::UpdateSucceeded(todo("elsewhere")));
        assert_eq!(state.items, before);
    }

    #[test]
    fn delete_success_requests_refetch_of_current_page() {
        let mut state = TodoState {
            current_page: 2,
            limit: 5,
            ..Default::default()
        };
        state.apply(TodoEvent::DeleteStarted);

        let followup = state.apply(TodoEvent::DeleteSucceeded);
        assert_eq!(followup, Some(Followup::RefetchList { page: 2, limit: 5 }));
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn failures_surface_exactly_one_message() {
        let mut state = TodoState::default();
        state.apply(TodoEvent::ListStarted);
        state.apply(TodoEvent::ListFailed("first".to_string()));
        assert_eq!(state.error.as_deref(), Some("first"));

        state.apply(TodoEvent::DeleteFailed("second".to_string()));
        assert_eq!(state.error.as_deref(), Some("second"));
        assert!(!state.loading);
    }

    #[test]
    fn page_change_touches_only_current_page() {
        let mut state = TodoState {
            items: vec![todo("A")],
            ..Default::default()
        };
        let items_before = state.items.clone();

        assert_eq!(state.apply(TodoEvent::PageChanged(4)), None);
        assert_eq!(state.current_page, 4);
        assert_eq!(state.items, items_before);
        assert!(!state.loading);
    }

    #[test]
    fn error_clear_only_clears_error() {
        let mut state = TodoState {
            error: Some("boom".to_string()),
            loading: true,
            ..Default::default()
        };
        state.apply(TodoEvent::ErrorCleared);
        assert_eq!(state.error, None);
        assert!(state.loading);
    }

    #[test]
    fn later_success_dismisses_earlier_error() {
        let mut state = TodoState::default();
        state.apply(TodoEvent::UpdateFailed("boom".to_string()));
        state.apply(TodoEvent::ListStarted);
        state.apply(TodoEvent::ListSucceeded(list_response(Vec::new(), 1, 0, 0)));
        assert_eq!(state.error, None);
    }
}
