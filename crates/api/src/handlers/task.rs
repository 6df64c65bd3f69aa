//! Handlers for the `/tasks` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;

use focusflow_core::types::DbId;
use focusflow_db::models::pomodoro::Pomodoro;
use focusflow_db::models::task::{CreateTask, Task, TaskWithPomodoros, UpdateTask};
use focusflow_db::repositories::{PomodoroRepo, TaskRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{Json, Query};
use crate::query::PaginationParams;
use crate::state::AppState;

/// POST /api/v1/tasks
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTask>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let task = TaskRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/v1/tasks
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskRepo::list(&state.pool, params.page, params.page_size).await?;
    Ok(Json(tasks))
}

/// GET /api/v1/tasks/{id}
///
/// Returns the task with its pomodoros inline. The child rows come from a
/// second explicit query, never a joined object graph.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TaskWithPomodoros>> {
    let task = TaskRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Task", id))?;
    let pomodoros = PomodoroRepo::list_by_task(&state.pool, id).await?;
    Ok(Json(TaskWithPomodoros { task, pomodoros }))
}

/// GET /api/v1/tasks/{task_id}/pomodoros
pub async fn list_pomodoros(
    State(state): State<AppState>,
    Path(task_id): Path<DbId>,
) -> AppResult<Json<Vec<Pomodoro>>> {
    TaskRepo::find_by_id(&state.pool, task_id)
        .await?
        .ok_or(AppError::not_found("Task", task_id))?;

    let pomodoros = PomodoroRepo::list_by_task(&state.pool, task_id).await?;
    Ok(Json(pomodoros))
}

/// PUT /api/v1/tasks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTask>,
) -> AppResult<Json<Task>> {
    let task = TaskRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Task", id))?;
    Ok(Json(task))
}

/// DELETE /api/v1/tasks/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = TaskRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Task", id))
    }
}
