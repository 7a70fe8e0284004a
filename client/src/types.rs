//! Wire DTOs for the todo GraphQL API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently;
//! integration tests catch any drift between the two crates. Optional
//! fields are omitted from the serialized form entirely rather than sent
//! as `null`.

use serde::{Deserialize, Serialize};

/// Task priority as it appears on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

/// A single todo item returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub task: String,
    pub completed: bool,
    pub priority: Priority,
}

/// Variables payload for `addTodo`. A missing priority lets the server
/// default to medium.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoInput {
    pub task: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

/// Variables payload for `getTodos`. Unset keys impose no constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TodoFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), r#""high""#);
        assert_eq!(serde_json::to_string(&Priority::Medium).unwrap(), r#""medium""#);
        assert_eq!(serde_json::to_string(&Priority::Low).unwrap(), r#""low""#);
    }

    #[test]
    fn todo_roundtrips_through_json() {
        let todo = Todo {
            id: "abc".to_string(),
            task: "Roundtrip".to_string(),
            completed: true,
            priority: Priority::Low,
        };
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back, todo);
    }

    #[test]
    fn input_omits_unset_priority() {
        let input = TodoInput {
            task: "No priority".to_string(),
            priority: None,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert!(json.get("priority").is_none());
    }

    #[test]
    fn empty_filter_serializes_to_empty_object() {
        let json = serde_json::to_value(TodoFilter::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn filter_keeps_set_keys_only() {
        let filter = TodoFilter {
            completed: Some(false),
            priority: None,
        };
        let json = serde_json::to_value(filter).unwrap();
        assert_eq!(json, serde_json::json!({ "completed": false }));
    }
}
