//! Todo use-case service.
//!
//! # Responsibility
//! - Provide the add/view/update/delete entry points used by front ends.
//! - Translate optional per-field input into repository patches.
//! - Emit metadata-only diagnostics for every mutation.
//!
//! # Invariants
//! - Service APIs never bypass repository validation.
//! - Log events never include titles or descriptions.

use crate::model::todo::{Todo, TodoId};
use crate::repo::todo_repo::{RepoError, RepoResult, TodoRepository, TodoUpdate};
use log::{debug, info, warn};

/// Use-case service wrapper for todo CRUD operations.
pub struct TodoService<R: TodoRepository> {
    repo: R,
}

impl<R: TodoRepository> TodoService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a todo with an auto-assigned id.
    ///
    /// # Contract
    /// - `title` and `description` are trimmed.
    /// - Fails with `RepoError::Validation` when the title is blank.
    pub fn add_todo(&mut self, title: &str, description: &str) -> RepoResult<Todo> {
        match self.repo.create_todo(title, description) {
            Ok(todo) => {
                info!(
                    "event=todo_create module=service status=ok id={} has_description={}",
                    todo.id,
                    todo.has_description()
                );
                Ok(todo)
            }
            Err(err) => {
                warn!(
                    "event=todo_create module=service status=error error={}",
                    err
                );
                Err(err)
            }
        }
    }

    /// Lists all todos sorted by ascending id.
    pub fn view_todos(&self) -> Vec<Todo> {
        let todos = self.repo.list_todos();
        debug!(
            "event=todo_list module=service status=ok count={}",
            todos.len()
        );
        todos
    }

    /// Gets one todo by id. Absence is not an error.
    pub fn get_todo(&self, id: TodoId) -> Option<Todo> {
        self.repo.get_todo(id)
    }

    /// Updates selected fields of an existing todo.
    ///
    /// # Contract
    /// - `None` keeps a field unchanged.
    /// - `Some("")` clears the description but is rejected for the title.
    /// - All-or-nothing: on error no field changes.
    pub fn update_todo(
        &mut self,
        id: TodoId,
        new_title: Option<&str>,
        new_description: Option<&str>,
    ) -> RepoResult<Todo> {
        let mut update = TodoUpdate::new();
        if let Some(title) = new_title {
            update = update.title(title);
        }
        if let Some(description) = new_description {
            update = update.description(description);
        }
        self.apply_update(id, &update)
    }

    /// Applies a prepared patch to an existing todo.
    pub fn apply_update(&mut self, id: TodoId, update: &TodoUpdate) -> RepoResult<Todo> {
        match self.repo.update_todo(id, update) {
            Ok(todo) => {
                info!(
                    "event=todo_update module=service status=ok id={} title_changed={} description_changed={}",
                    id,
                    update.title.is_some(),
                    update.description.is_some()
                );
                Ok(todo)
            }
            Err(err) => {
                let error_code = match err {
                    RepoError::NotFound(_) => "not_found",
                    RepoError::Validation(_) => "validation",
                };
                warn!(
                    "event=todo_update module=service status=error id={} error_code={}",
                    id, error_code
                );
                Err(err)
            }
        }
    }

    /// Deletes a todo. Returns `false` when it did not exist.
    pub fn delete_todo(&mut self, id: TodoId) -> bool {
        let deleted = self.repo.delete_todo(id);
        info!(
            "event=todo_delete module=service status={} id={}",
            if deleted { "ok" } else { "missing" },
            id
        );
        deleted
    }

    /// Number of stored todos.
    pub fn todo_count(&self) -> usize {
        self.repo.len()
    }
}
