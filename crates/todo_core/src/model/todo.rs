//! Todo domain model.
//!
//! # Responsibility
//! - Define the canonical todo record handed out by the store.
//! - Own the trimming and non-empty rules for titles and descriptions.
//!
//! # Invariants
//! - `id` is positive and never changes after creation.
//! - `title` is trimmed and never empty.
//! - `description` is trimmed and may be empty.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned todo identifier. Sequence starts at 1.
pub type TodoId = u64;

/// Validation failures for todo fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoValidationError {
    /// Title is empty or whitespace-only after trimming.
    EmptyTitle,
    /// Id `0` is reserved and never assigned.
    ZeroId,
    /// Identifier sequence cannot advance further. Filed under validation
    /// because the store surfaces only validation and not-found failures.
    IdSpaceExhausted,
}

impl Display for TodoValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "title cannot be empty"),
            Self::ZeroId => write!(f, "todo id must be positive"),
            Self::IdSpaceExhausted => write!(f, "no todo ids left to assign"),
        }
    }
}

impl Error for TodoValidationError {}

/// Snapshot of one todo item.
///
/// Values returned by the store are copies; changing them has no effect on
/// stored state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTodo")]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub description: String,
}

impl Todo {
    /// Builds a todo from raw caller input, trimming both text fields.
    ///
    /// # Errors
    /// - `ZeroId` when `id == 0`.
    /// - `EmptyTitle` when `title` is blank after trimming.
    pub(crate) fn new(id: TodoId, title: &str, description: &str) -> Result<Self, TodoValidationError> {
        let todo = Self {
            id,
            title: normalize_title(title)?,
            description: normalize_description(description),
        };
        todo.validate()?;
        Ok(todo)
    }

    /// Checks record-level invariants.
    pub fn validate(&self) -> Result<(), TodoValidationError> {
        if self.id == 0 {
            return Err(TodoValidationError::ZeroId);
        }
        if self.title.trim().is_empty() {
            return Err(TodoValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// Returns whether the description carries any text.
    pub fn has_description(&self) -> bool {
        !self.description.is_empty()
    }
}

/// Trims a title and rejects blank values.
pub fn normalize_title(value: &str) -> Result<String, TodoValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TodoValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

/// Trims a description. Empty input yields an empty description.
pub fn normalize_description(value: &str) -> String {
    value.trim().to_string()
}

#[derive(Deserialize)]
struct RawTodo {
    id: TodoId,
    title: String,
    #[serde(default)]
    description: String,
}

impl TryFrom<RawTodo> for Todo {
    type Error = TodoValidationError;

    fn try_from(raw: RawTodo) -> Result<Self, Self::Error> {
        Todo::new(raw.id, &raw.title, &raw.description)
    }
}
