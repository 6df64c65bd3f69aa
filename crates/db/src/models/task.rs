//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use focusflow_core::types::{DbId, Timestamp};

use crate::models::pomodoro::Pomodoro;
use crate::models::status::StatusId;

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub project_id: DbId,
    pub description: String,
    pub status_id: StatusId,
    pub deadline: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A task together with its pomodoros, as returned by get-by-id.
///
/// The pomodoros are fetched by a separate query; tasks never hold live
/// references to child rows.
#[derive(Debug, Serialize)]
pub struct TaskWithPomodoros {
    #[serde(flatten)]
    pub task: Task,
    pub pomodoros: Vec<Pomodoro>,
}

/// DTO for creating a new task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub project_id: DbId,
    pub description: String,
    /// Defaults to 1 (Todo) if omitted.
    pub status_id: Option<StatusId>,
    pub deadline: Option<Timestamp>,
}

/// DTO for updating an existing task. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTask {
    pub description: Option<String>,
    pub status_id: Option<StatusId>,
    pub deadline: Option<Timestamp>,
}
