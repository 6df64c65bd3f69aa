//! Handlers for the `/pomodoros` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;

use focusflow_core::types::DbId;
use focusflow_db::models::pomodoro::{CreatePomodoro, Pomodoro, UpdatePomodoro};
use focusflow_db::repositories::PomodoroRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{Json, Query};
use crate::query::PaginationParams;
use crate::state::AppState;

/// POST /api/v1/pomodoros
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePomodoro>,
) -> AppResult<(StatusCode, Json<Pomodoro>)> {
    let pomodoro = PomodoroRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(pomodoro)))
}

/// GET /api/v1/pomodoros
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Pomodoro>>> {
    let pomodoros = PomodoroRepo::list(&state.pool, params.page, params.page_size).await?;
    Ok(Json(pomodoros))
}

/// GET /api/v1/pomodoros/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Pomodoro>> {
    let pomodoro = PomodoroRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Pomodoro", id))?;
    Ok(Json(pomodoro))
}

/// PUT /api/v1/pomodoros/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePomodoro>,
) -> AppResult<Json<Pomodoro>> {
    let pomodoro = PomodoroRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Pomodoro", id))?;
    Ok(Json(pomodoro))
}

/// DELETE /api/v1/pomodoros/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = PomodoroRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Pomodoro", id))
    }
}
