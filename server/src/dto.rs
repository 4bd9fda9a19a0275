//! Wire shapes for the todo API.
//!
//! # Design
//! `TodoView` is the only representation that leaves the service; it drops
//! timestamps and soft-delete state. Update fields are `Option`s so an absent
//! key and a present key stay distinguishable.

use serde::{Deserialize, Serialize};

use crate::entity::todo;

/// Externally visible projection of a todo.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoView {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub done: bool,
}

impl From<todo::Model> for TodoView {
    fn from(model: todo::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            done: model.done,
        }
    }
}

/// Request payload for creating a todo.
#[derive(Clone, Debug, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request payload for a partial update. Only present keys are applied.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub done: Option<bool>,
}

/// Query-string filter for the list endpoint.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TodoFilter {
    pub done: Option<bool>,
}

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_serializes_to_expected_shape() {
        let view = TodoView {
            id: 3,
            title: "Test".to_string(),
            description: String::new(),
            done: false,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 3, "title": "Test", "description": "", "done": false})
        );
    }

    #[test]
    fn create_todo_description_is_optional() {
        let input: CreateTodo = serde_json::from_str(r#"{"title":"No description"}"#).unwrap();
        assert_eq!(input.title, "No description");
        assert!(input.description.is_none());
    }

    #[test]
    fn create_todo_rejects_missing_title() {
        let result: Result<CreateTodo, _> = serde_json::from_str(r#"{"description":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_todo_distinguishes_absent_from_false() {
        let empty: UpdateTodo = serde_json::from_str("{}").unwrap();
        assert!(empty.done.is_none());

        let explicit: UpdateTodo = serde_json::from_str(r#"{"done":false}"#).unwrap();
        assert_eq!(explicit.done, Some(false));
        assert!(explicit.title.is_none());
    }
}
