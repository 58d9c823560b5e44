use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::TodoError;

pub const NAME_MIN_CHARS: usize = 3;
pub const NAME_MAX_CHARS: usize = 512;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct TodoId(pub i64);

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

/// Urgency of a todo. Travels as an integer: 1 is the most urgent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    High,
    Medium,
    #[default]
    Low,
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Priority::High),
            2 => Ok(Priority::Medium),
            3 => Ok(Priority::Low),
            other => Err(format!("invalid priority {other}, expected 1 (high), 2 (medium) or 3 (low)")),
        }
    }
}

impl From<Priority> for u8 {
    fn from(p: Priority) -> Self {
        match p {
            Priority::High => 1,
            Priority::Medium => 2,
            Priority::Low => 3,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    #[serde(rename = "todo_id")]
    pub id: TodoId,
    #[serde(rename = "todo_name")]
    pub name: String,
    #[serde(rename = "todo_description")]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    #[serde(rename = "todo_name")]
    pub name: String,
    #[serde(rename = "todo_description")]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
}

impl CreateTodo {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self { name: name.into(), description: description.into(), priority: Priority::default() }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn validate(&self) -> Result<(), TodoError> { validate_name(&self.name) }

    pub fn into_todo(self, id: TodoId) -> Todo {
        Todo { id, name: self.name, description: self.description, priority: self.priority }
    }
}

/// Partial update. `None` (absent or JSON `null`) leaves the field untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    #[serde(default, rename = "todo_name")]
    pub name: Option<String>,
    #[serde(default, rename = "todo_description")]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
}

impl UpdateTodo {
    pub fn validate(&self) -> Result<(), TodoError> {
        match &self.name {
            Some(name) => validate_name(name),
            None => Ok(()),
        }
    }

    pub fn apply_to(self, todo: &mut Todo) {
        if let Some(n) = self.name { todo.name = n; }
        if let Some(d) = self.description { todo.description = d; }
        if let Some(p) = self.priority { todo.priority = p; }
    }
}

fn validate_name(name: &str) -> Result<(), TodoError> {
    let len = name.chars().count();
    if (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&len) {
        Ok(())
    } else {
        Err(TodoError::Validation {
            field: "todo_name",
            message: format!("must be between {NAME_MIN_CHARS} and {NAME_MAX_CHARS} characters, got {len}"),
        })
    }
}
