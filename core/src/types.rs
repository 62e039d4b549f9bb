//! Wire DTOs for the todo API.
//!
//! These mirror the server's schema but are defined independently, so the
//! client does not depend on Axum or the store.

use serde::{Deserialize, Serialize};

/// Urgency of a todo, encoded as 1 (high), 2 (medium) or 3 (low).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    High,
    Medium,
    #[default]
    Low,
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Priority::High),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::Low),
            other => Err(format!("unknown priority code {other}")),
        }
    }
}

/// A todo as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub todo_id: i64,
    pub todo_name: String,
    pub todo_description: String,
    pub priority: Priority,
}

/// Request payload for creating a todo. `priority: None` lets the server
/// apply its default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub todo_name: String,
    pub todo_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

/// Request payload for updating a todo. Only the fields present in the JSON
/// are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todo_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todo_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}
