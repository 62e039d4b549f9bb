//! Todo records and the request payloads that create or patch them.
//!
//! `Priority` travels on the wire as its integer code (high=1, medium=2,
//! low=3). The code is only an encoding; nothing orders todos by it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::{check_name, ValidationError};

/// Urgency of a todo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Priority {
    High = 1,
    Medium = 2,
    #[default]
    Low = 3,
}

/// Returned when an integer is not a known priority code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid priority code {0}, expected 1 (high), 2 (medium) or 3 (low)")]
pub struct InvalidPriority(pub i64);

impl From<Priority> for i64 {
    fn from(priority: Priority) -> Self {
        priority as i64
    }
}

impl TryFrom<i64> for Priority {
    type Error = InvalidPriority;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Priority::High),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::Low),
            other => Err(InvalidPriority(other)),
        }
    }
}

/// A stored todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub todo_id: i64,
    pub todo_name: String,
    #[serde(alias = "todo_descripstion")]
    pub todo_description: String,
    pub priority: Priority,
}

/// Payload for `POST /todos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoCreate {
    pub todo_name: String,
    #[serde(alias = "todo_descripstion")]
    pub todo_description: String,
    #[serde(default)]
    pub priority: Priority,
}

impl TodoCreate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::collect(check_name(&self.todo_name))
    }

    /// Attach the store-assigned id.
    pub fn into_todo(self, todo_id: i64) -> Todo {
        Todo {
            todo_id,
            todo_name: self.todo_name,
            todo_description: self.todo_description,
            priority: self.priority,
        }
    }
}

/// Payload for `PUT /todos/{todo_id}`. Absent and `null` fields both mean
/// "leave unchanged".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub todo_name: Option<String>,
    #[serde(
        default,
        alias = "todo_descripstion",
        skip_serializing_if = "Option::is_none"
    )]
    pub todo_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl TodoUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::collect(self.todo_name.as_deref().and_then(check_name))
    }

    /// Overwrite every field of `todo` that this patch sets.
    pub fn apply(self, todo: &mut Todo) {
        if let Some(name) = self.todo_name {
            todo.todo_name = name;
        }
        if let Some(description) = self.todo_description {
            todo.todo_description = description;
        }
        if let Some(priority) = self.priority {
            todo.priority = priority;
        }
    }
}
