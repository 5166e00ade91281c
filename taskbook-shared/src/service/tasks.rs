/// Task service
///
/// The one non-trivial contract in the system: every mutation goes through
/// fetch-by-id, ownership check, field merge. The authenticated caller's ID
/// arrives from the auth middleware and is trusted here; the service never
/// re-verifies credentials.
///
/// # Ownership rule
///
/// A task belongs to exactly one user, fixed at creation. Update and delete
/// both require the caller to be the stored owner and fail with
/// [`TaskServiceError::NotOwner`] otherwise, leaving the record unchanged.
///
/// # Example
///
/// ```no_run
/// use taskbook_shared::models::task::TaskPatch;
/// use taskbook_shared::service::tasks::{self, NewTask};
/// # use sqlx::PgPool;
/// # use uuid::Uuid;
/// # async fn example(pool: PgPool, owner: Uuid) -> Result<(), Box<dyn std::error::Error>> {
/// let task = tasks::create(&pool, owner, NewTask {
///     title: "Buy milk".to_string(),
///     description: None,
///     completed: None,
/// })
/// .await?;
///
/// let patch = TaskPatch { completed: Some(true), ..Default::default() };
/// tasks::update(&pool, owner, task.id, patch).await?;
/// # Ok(())
/// # }
/// ```

use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::models::task::{CreateTask, Task, TaskPatch};

/// Error type for task service operations
#[derive(Debug, thiserror::Error)]
pub enum TaskServiceError {
    /// Bad input, e.g. an empty title
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Unknown task ID
    #[error("Task not found")]
    NotFound,

    /// The caller is not the task's owner
    #[error("User not authorized")]
    NotOwner,

    /// Underlying persistence failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Input for creating a task
///
/// The owner is not part of this struct; it always comes from the
/// authenticated caller.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    /// Task title (must be non-empty)
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Initial completion flag (defaults to false)
    pub completed: Option<bool>,
}

/// Creates a task owned by `owner`
///
/// # Errors
///
/// Returns [`TaskServiceError::Validation`] if the title is empty or
/// whitespace-only.
pub async fn create(pool: &PgPool, owner: Uuid, data: NewTask) -> Result<Task, TaskServiceError> {
    validate_title(&data.title)?;

    let task = Task::create(
        pool,
        CreateTask {
            user_id: owner,
            title: data.title,
            description: data.description,
            completed: data.completed.unwrap_or(false),
        },
    )
    .await?;

    debug!(task_id = %task.id, user_id = %owner, "Task created");
    Ok(task)
}

/// Lists all tasks owned by `owner`, newest first
pub async fn list_for_owner(pool: &PgPool, owner: Uuid) -> Result<Vec<Task>, TaskServiceError> {
    let tasks = Task::list_by_owner(pool, owner).await?;
    Ok(tasks)
}

/// Applies a partial update to a task owned by `owner`
///
/// Looks the task up by ID, verifies the stored owner matches the caller,
/// then merges only the fields present in `patch`. Absent fields are left
/// untouched, never cleared.
///
/// # Errors
///
/// - [`TaskServiceError::NotFound`] if no task has this ID
/// - [`TaskServiceError::NotOwner`] if the caller doesn't own the task
/// - [`TaskServiceError::Validation`] if the patch carries an empty title
pub async fn update(
    pool: &PgPool,
    owner: Uuid,
    task_id: Uuid,
    patch: TaskPatch,
) -> Result<Task, TaskServiceError> {
    if let Some(ref title) = patch.title {
        validate_title(title)?;
    }

    let existing = Task::find_by_id(pool, task_id)
        .await?
        .ok_or(TaskServiceError::NotFound)?;

    if existing.user_id != owner {
        debug!(task_id = %task_id, user_id = %owner, "Update rejected: caller is not the owner");
        return Err(TaskServiceError::NotOwner);
    }

    // The task can vanish between the read and the write; treat that as
    // not-found rather than a server error.
    let updated = Task::apply_patch(pool, task_id, patch)
        .await?
        .ok_or(TaskServiceError::NotFound)?;

    Ok(updated)
}

/// Deletes a task owned by `owner`
///
/// Enforces the same fetch-by-id + ownership check as [`update`].
///
/// # Errors
///
/// - [`TaskServiceError::NotFound`] if no task has this ID
/// - [`TaskServiceError::NotOwner`] if the caller doesn't own the task
pub async fn delete(pool: &PgPool, owner: Uuid, task_id: Uuid) -> Result<(), TaskServiceError> {
    let existing = Task::find_by_id(pool, task_id)
        .await?
        .ok_or(TaskServiceError::NotFound)?;

    if existing.user_id != owner {
        debug!(task_id = %task_id, user_id = %owner, "Delete rejected: caller is not the owner");
        return Err(TaskServiceError::NotOwner);
    }

    let deleted = Task::delete(pool, task_id).await?;
    if !deleted {
        return Err(TaskServiceError::NotFound);
    }

    debug!(task_id = %task_id, user_id = %owner, "Task deleted");
    Ok(())
}

fn validate_title(title: &str) -> Result<(), TaskServiceError> {
    if title.trim().is_empty() {
        return Err(TaskServiceError::Validation(
            "Title is required".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title_rejects_empty() {
        assert!(matches!(
            validate_title(""),
            Err(TaskServiceError::Validation(_))
        ));
        assert!(matches!(
            validate_title("   "),
            Err(TaskServiceError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_title_accepts_non_empty() {
        assert!(validate_title("Buy milk").is_ok());
    }

    #[test]
    fn test_new_task_default_completed_is_none() {
        let data = NewTask {
            title: "Buy milk".to_string(),
            ..Default::default()
        };
        assert!(data.completed.is_none());
        assert!(data.description.is_none());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(TaskServiceError::NotFound.to_string(), "Task not found");
        assert_eq!(TaskServiceError::NotOwner.to_string(), "User not authorized");
        assert_eq!(
            TaskServiceError::Validation("Title is required".to_string()).to_string(),
            "Validation failed: Title is required"
        );
    }

    // Database-backed service tests (ownership enforcement, merge semantics)
    // live in taskbook-api/tests/.
}
