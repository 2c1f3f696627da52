//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation and repository calls into use-case level APIs.
//! - Keep the console layer decoupled from storage details.

pub mod employee_service;
pub mod project_service;
