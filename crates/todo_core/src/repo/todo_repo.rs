//! Todo repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own the id -> todo mapping and the id sequence.
//! - Provide CRUD APIs that hand out snapshots, never live references.
//!
//! # Invariants
//! - Ids are assigned in strictly increasing order starting at 1 and are
//!   never reused, even after deletion.
//! - Write paths validate the full record before it is stored.
//! - A failed update leaves the stored record untouched.

use crate::model::todo::{normalize_description, normalize_title, Todo, TodoId, TodoValidationError};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

const FIRST_TODO_ID: TodoId = 1;

pub type RepoResult<T> = Result<T, RepoError>;

/// Errors surfaced by todo repository operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(TodoValidationError),
    NotFound(TodoId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "todo with id {id} does not exist"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<TodoValidationError> for RepoError {
    fn from(value: TodoValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Field-wise patch for `update_todo`.
///
/// `None` leaves a field unchanged. `Some(value)` replaces it; for the
/// description an empty value clears the field, for the title it is a
/// validation error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl TodoUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns whether this patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }

    /// Applies this patch to a copy of `current`.
    ///
    /// Title is checked before description; on error nothing is produced.
    fn apply_to(&self, current: &Todo) -> RepoResult<Todo> {
        let mut next = current.clone();
        if let Some(title) = &self.title {
            next.title = normalize_title(title)?;
        }
        if let Some(description) = &self.description {
            next.description = normalize_description(description);
        }
        next.validate()?;
        Ok(next)
    }
}

/// Repository interface for todo CRUD operations.
pub trait TodoRepository {
    fn create_todo(&mut self, title: &str, description: &str) -> RepoResult<Todo>;
    fn get_todo(&self, id: TodoId) -> Option<Todo>;
    /// Returns all todos sorted by ascending id.
    fn list_todos(&self) -> Vec<Todo>;
    fn update_todo(&mut self, id: TodoId, update: &TodoUpdate) -> RepoResult<Todo>;
    /// Returns `false` when `id` is not stored.
    fn delete_todo(&mut self, id: TodoId) -> bool;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-local todo storage. State is dropped with the value.
#[derive(Debug)]
pub struct InMemoryTodoRepository {
    todos: BTreeMap<TodoId, Todo>,
    next_id: TodoId,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self {
            todos: BTreeMap::new(),
            next_id: FIRST_TODO_ID,
        }
    }

    /// Id the next successful create will receive.
    pub fn next_id(&self) -> TodoId {
        self.next_id
    }
}

impl Default for InMemoryTodoRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoRepository for InMemoryTodoRepository {
    fn create_todo(&mut self, title: &str, description: &str) -> RepoResult<Todo> {
        let id = self.next_id;
        let todo = Todo::new(id, title, description)?;
        // Only advance once the record is known to be valid.
        self.next_id = id
            .checked_add(1)
            .ok_or(TodoValidationError::IdSpaceExhausted)?;
        self.todos.insert(id, todo.clone());
        Ok(todo)
    }

    fn get_todo(&self, id: TodoId) -> Option<Todo> {
        self.todos.get(&id).cloned()
    }

    fn list_todos(&self) -> Vec<Todo> {
        self.todos.values().cloned().collect()
    }

    fn update_todo(&mut self, id: TodoId, update: &TodoUpdate) -> RepoResult<Todo> {
        let stored = self.todos.get_mut(&id).ok_or(RepoError::NotFound(id))?;
        let next = update.apply_to(stored)?;
        *stored = next.clone();
        Ok(next)
    }

    fn delete_todo(&mut self, id: TodoId) -> bool {
        self.todos.remove(&id).is_some()
    }

    fn len(&self) -> usize {
        self.todos.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryTodoRepository, RepoError, TodoRepository, TodoUpdate};
    use crate::model::todo::TodoValidationError;

    #[test]
    fn next_id_starts_at_one() {
        let repo = InMemoryTodoRepository::new();
        assert_eq!(repo.next_id(), 1);
        assert!(repo.is_empty());
    }

    #[test]
    fn failed_create_does_not_consume_an_id() {
        let mut repo = InMemoryTodoRepository::new();
        repo.create_todo("  ", "").unwrap_err();
        let todo = repo.create_todo("first", "").unwrap();
        assert_eq!(todo.id, 1);
    }

    #[test]
    fn exhausted_sequence_is_reported_instead_of_wrapping() {
        let mut repo = InMemoryTodoRepository::new();
        repo.next_id = u64::MAX;
        let err = repo.create_todo("last", "").unwrap_err();
        assert_eq!(
            err,
            RepoError::Validation(TodoValidationError::IdSpaceExhausted)
        );
        assert!(repo.is_empty());
    }

    #[test]
    fn empty_update_returns_current_snapshot() {
        let mut repo = InMemoryTodoRepository::new();
        let created = repo.create_todo("keep", "as is").unwrap();
        let update = TodoUpdate::new();
        assert!(update.is_empty());
        assert_eq!(repo.update_todo(created.id, &update).unwrap(), created);
    }

    #[test]
    fn returned_snapshots_are_detached_from_storage() {
        let mut repo = InMemoryTodoRepository::new();
        let mut snapshot = repo.create_todo("original", "").unwrap();
        snapshot.title = "mutated".to_string();
        assert_eq!(repo.get_todo(1).unwrap().title, "original");
    }
}
