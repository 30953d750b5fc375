//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Keep storage details out of the service layer.
//!
//! # Invariants
//! - Repository writes must enforce `Todo::validate()` before storing.
//! - Repository APIs return semantic errors (`NotFound`, `Validation`);
//!   lookups and deletes signal absence through `Option`/`bool`.

pub mod todo_repo;
