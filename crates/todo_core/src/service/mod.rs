//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep front ends decoupled from storage details.

pub mod todo_service;
