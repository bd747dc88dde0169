//! Todo record and status types.
//!
//! # Design
//! JSON field names are camelCase (`createdAt`, `updatedAt`) and status
//! values are the exact strings `Pending`, `In-Progress`, `Completed`,
//! matching what the browser client expects on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a todo. Wire strings are case-sensitive; nothing
/// outside the three values is accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Pending,
    #[serde(rename = "In-Progress")]
    InProgress,
    Completed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::InProgress => "In-Progress",
            Status::Completed => "Completed",
        }
    }
}

impl std::str::FromStr for Status {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(Status::Pending),
            "In-Progress" => Ok(Status::InProgress),
            "Completed" => Ok(Status::Completed),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single todo record.
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

impl Todo {
    /// Build a fresh record: server-assigned id, `Pending` status, and both
    /// timestamps set from the same instant so `updated_at == created_at`.
    pub fn new(title: String, description: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            status: Status::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_to_exact_wire_strings() {
        assert_eq!(serde_json::to_value(Status::Pending).unwrap(), "Pending");
        assert_eq!(serde_json::to_value(Status::InProgress).unwrap(), "In-Progress");
        assert_eq!(serde_json::to_value(Status::Completed).unwrap(), "Completed");
    }

    #[test]
    fn status_rejects_unknown_strings() {
        assert!(serde_json::from_str::<Status>(r#""Done""#).is_err());
        assert!(serde_json::from_str::<Status>(r#""pending""#).is_err());
        assert!(serde_json::from_str::<Status>(r#""in-progress""#).is_err());
    }

    #[test]
    fn status_parses_from_str() {
        assert_eq!("Pending".parse(), Ok(Status::Pending));
        assert_eq!("In-Progress".parse(), Ok(Status::InProgress));
        assert_eq!("Completed".parse(), Ok(Status::Completed));
        assert!("Done".parse::<Status>().is_err());
        assert!("".parse::<Status>().is_err());
    }

    #[test]
    fn new_todo_defaults_and_matching_timestamps() {
        let todo = Todo::new("Buy milk".to_string(), String::new());
        assert_eq!(todo.status, Status::Pending);
        assert_eq!(todo.created_at, todo.updated_at);
    }

    #[test]
    fn todo_serializes_with_camel_case_fields() {
        let todo = Todo::new("Test".to_string(), "desc".to_string());
        let json = serde_json::to_value(&todo).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert_eq!(json["status"], "Pending");
    }
}
