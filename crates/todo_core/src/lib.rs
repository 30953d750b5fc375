//! Core domain logic for the todo manager.
//! This crate is the single source of truth for todo invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{Todo, TodoId, TodoValidationError};
pub use repo::todo_repo::{
    InMemoryTodoRepository, RepoError, RepoResult, TodoRepository, TodoUpdate,
};
pub use service::todo_service::TodoService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
