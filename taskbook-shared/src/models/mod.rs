/// Database models for Taskbook
///
/// This module contains the database models and their CRUD operations.
///
/// # Models
///
/// - `user`: User accounts and authentication
/// - `task`: Per-user task records

pub mod task;
pub mod user;
