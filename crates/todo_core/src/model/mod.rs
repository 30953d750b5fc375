//! Domain model for todo records.
//!
//! # Responsibility
//! - Define the data structure shared by the store and its callers.
//! - Keep field normalization rules next to the type they protect.
//!
//! # Invariants
//! - Every todo is identified by a store-assigned `TodoId`.
//! - Deletion removes a record outright; there are no tombstones.

pub mod todo;
