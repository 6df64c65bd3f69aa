//! Pomodoro entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use focusflow_core::types::{DbId, Timestamp};

/// A pomodoro row from the `pomodoros` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Pomodoro {
    pub id: DbId,
    pub task_id: DbId,
    pub started_at: Timestamp,
    pub duration_minutes: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new pomodoro.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePomodoro {
    pub task_id: DbId,
    /// Defaults to NOW() if omitted.
    pub started_at: Option<Timestamp>,
    pub duration_minutes: i32,
}

/// DTO for updating an existing pomodoro. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePomodoro {
    pub started_at: Option<Timestamp>,
    pub duration_minutes: Option<i32>,
}
