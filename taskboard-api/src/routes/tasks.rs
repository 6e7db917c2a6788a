/// Task CRUD endpoints
///
/// Same shape as the user endpoints, with one addition: task creation
/// names the owning user in a `user_id` query parameter and checks that
/// the user exists before inserting. The check and the insert are two
/// sequential statements, not a transaction; a user deleted in between
/// fails the insert on the foreign key instead of inserting an orphan.
///
/// # Endpoints
///
/// - `GET    /task/` - List tasks
/// - `GET    /task/:task_id` - Get task by id
/// - `POST   /task/create?user_id=N` - Create task for a user (201)
/// - `PUT    /task/update/:task_id` - Update task
/// - `DELETE /task/delete/:task_id` - Delete task

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    routes::Ack,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use taskboard_shared::models::{
    task::{CreateTask, Task, UpdateTask},
    user::User,
};

/// Query parameters for task creation
#[derive(Debug, Deserialize)]
pub struct CreateTaskParams {
    /// ID of the user that will own the task
    pub user_id: i64,
}

/// Lists all tasks
///
/// Always succeeds; returns an empty list when there are no tasks.
pub async fn all_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let tasks = Task::list(&state.db).await?;
    Ok(Json(tasks))
}

/// Gets a task by id
///
/// # Errors
///
/// - `404 Not Found`: No task with that id
pub async fn task_by_id(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> ApiResult<Json<Task>> {
    let task = Task::find_by_id(&state.db, task_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task was not found".to_string()))?;

    Ok(Json(task))
}

/// Creates a task owned by the user named in the query string
///
/// The owning user's existence is checked first; on a miss nothing is
/// inserted and the response reports the missing *user*.
///
/// # Endpoint
///
/// ```text
/// POST /task/create?user_id=1
/// Content-Type: application/json
///
/// {"title": "write report", "content": "quarterly numbers", "priority": 2}
/// ```
///
/// # Errors
///
/// - `404 Not Found`: No user with that `user_id`
pub async fn create_task(
    State(state): State<AppState>,
    Query(params): Query<CreateTaskParams>,
    Json(payload): Json<CreateTask>,
) -> ApiResult<(StatusCode, Json<Ack>)> {
    let user = User::find_by_id(&state.db, params.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User was not found".to_string()))?;

    let task = Task::create(&state.db, user.id, payload).await?;
    tracing::debug!(task_id = task.id, user_id = user.id, "Created task");

    Ok((
        StatusCode::CREATED,
        Json(Ack::new(StatusCode::CREATED, "Successful")),
    ))
}

/// Updates a task
///
/// Full overwrite of title, content, and priority; `user_id` is never
/// touched.
///
/// # Errors
///
/// - `404 Not Found`: No task with that id
pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
    Json(payload): Json<UpdateTask>,
) -> ApiResult<Json<Ack>> {
    let updated = Task::update(&state.db, task_id, payload).await?;

    if !updated {
        return Err(ApiError::NotFound("Task was not found".to_string()));
    }

    Ok(Json(Ack::new(
        StatusCode::OK,
        "Task update is successful!",
    )))
}

/// Deletes a task
///
/// # Errors
///
/// - `404 Not Found`: No task with that id
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> ApiResult<Json<Ack>> {
    let deleted = Task::delete(&state.db, task_id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Task was not found".to_string()));
    }

    Ok(Json(Ack::new(StatusCode::OK, "Task deleted successfully!")))
}
