/// Task CRUD endpoints
///
/// All routes here sit behind the JWT middleware; the authenticated caller
/// arrives as an [`AuthContext`] extension and is the owner for every
/// operation. The ownership rule itself lives in the task service, not here.
///
/// # Endpoints
///
/// - `POST /api/tasks` - Create task
/// - `GET /api/tasks` - List caller's tasks, newest first
/// - `PUT /api/tasks/:id` - Partial update (owner only)
/// - `DELETE /api/tasks/:id` - Delete (owner only)

use crate::{app::AppState, error::ApiResult};
use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use taskbook_shared::{
    auth::middleware::AuthContext,
    models::task::{Task, TaskPatch},
    service::tasks::{self, NewTask},
};
use uuid::Uuid;

/// Create task request
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    /// Task title (must be non-empty)
    pub title: String,

    /// Optional description
    pub description: Option<String>,

    /// Initial completion flag (defaults to false)
    pub completed: Option<bool>,
}

/// Delete task response
#[derive(Debug, Serialize)]
pub struct DeleteTaskResponse {
    /// Confirmation message
    pub msg: String,
}

/// Create task endpoint
///
/// The owner is always the authenticated caller; a user ID in the request
/// body is not accepted.
///
/// # Endpoint
///
/// ```text
/// POST /api/tasks
/// Authorization: Bearer <access_token>
/// Content-Type: application/json
///
/// {
///   "title": "Buy milk",
///   "description": "2 liters, whole"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Empty or whitespace-only title
/// - `401 Unauthorized`: Missing or invalid token
pub async fn create_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<Json<Task>> {
    let task = tasks::create(
        &state.db,
        auth.user_id,
        NewTask {
            title: req.title,
            description: req.description,
            completed: req.completed,
        },
    )
    .await?;

    Ok(Json(task))
}

/// List tasks endpoint
///
/// Returns only the caller's tasks, newest first. Other users' tasks are
/// never visible here regardless of how many exist.
///
/// # Endpoint
///
/// ```text
/// GET /api/tasks
/// Authorization: Bearer <access_token>
/// ```
pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<Vec<Task>>> {
    let tasks = tasks::list_for_owner(&state.db, auth.user_id).await?;
    Ok(Json(tasks))
}

/// Update task endpoint
///
/// Partial update: only fields present in the body change, absent fields
/// are left untouched.
///
/// # Endpoint
///
/// ```text
/// PUT /api/tasks/:id
/// Authorization: Bearer <access_token>
/// Content-Type: application/json
///
/// {
///   "completed": true
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Patch carries an empty title
/// - `401 Unauthorized`: Caller is not the task's owner
/// - `404 Not Found`: No task with this ID
pub async fn update_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(task_id): Path<Uuid>,
    Json(patch): Json<TaskPatch>,
) -> ApiResult<Json<Task>> {
    let task = tasks::update(&state.db, auth.user_id, task_id, patch).await?;
    Ok(Json(task))
}

/// Delete task endpoint
///
/// # Endpoint
///
/// ```text
/// DELETE /api/tasks/:id
/// Authorization: Bearer <access_token>
/// ```
///
/// # Errors
///
/// - `401 Unauthorized`: Caller is not the task's owner
/// - `404 Not Found`: No task with this ID
pub async fn delete_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(task_id): Path<Uuid>,
) -> ApiResult<Json<DeleteTaskResponse>> {
    tasks::delete(&state.db, auth.user_id, task_id).await?;

    Ok(Json(DeleteTaskResponse {
        msg: "Task removed".to_string(),
    }))
}
