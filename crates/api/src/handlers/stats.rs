//! Status-count aggregation endpoints.

use axum::extract::State;
use axum::Json;

use focusflow_db::repositories::stats_repo::{ProjectStatusCounts, TaskStatusCounts};
use focusflow_db::repositories::StatsRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/projects/stats
pub async fn project_stats(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<ProjectStatusCounts>>> {
    let data = StatsRepo::project_counts(&state.pool).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/tasks/stats
pub async fn task_stats(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<TaskStatusCounts>>> {
    let data = StatsRepo::task_counts(&state.pool).await?;
    Ok(Json(DataResponse { data }))
}
