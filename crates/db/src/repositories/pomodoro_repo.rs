//! Repository for the `pomodoros` table.

use sqlx::PgPool;

use focusflow_core::pagination::{clamp_page, clamp_page_size, page_offset};
use focusflow_core::types::DbId;

use crate::models::pomodoro::{CreatePomodoro, Pomodoro, UpdatePomodoro};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, task_id, started_at, duration_minutes, created_at, updated_at";

/// Provides CRUD operations for pomodoros.
pub struct PomodoroRepo;

impl PomodoroRepo {
    /// Insert a new pomodoro, returning the created row.
    ///
    /// `started_at` defaults to NOW() if omitted.
    pub async fn create(pool: &PgPool, input: &CreatePomodoro) -> Result<Pomodoro, sqlx::Error> {
        let query = format!(
            "INSERT INTO pomodoros (task_id, started_at, duration_minutes)
             VALUES ($1, COALESCE($2, NOW()), $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pomodoro>(&query)
            .bind(input.task_id)
            .bind(input.started_at)
            .bind(input.duration_minutes)
            .fetch_one(pool)
            .await
    }

    /// Find a pomodoro by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Pomodoro>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pomodoros WHERE id = $1");
        sqlx::query_as::<_, Pomodoro>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a page of pomodoros in stored (insertion) order.
    pub async fn list(
        pool: &PgPool,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<Vec<Pomodoro>, sqlx::Error> {
        let page = clamp_page(page);
        let page_size = clamp_page_size(page_size);
        let query = format!("SELECT {COLUMNS} FROM pomodoros ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Pomodoro>(&query)
            .bind(page_size)
            .bind(page_offset(page, page_size))
            .fetch_all(pool)
            .await
    }

    /// List all pomodoros belonging to a task, in stored order.
    pub async fn list_by_task(pool: &PgPool, task_id: DbId) -> Result<Vec<Pomodoro>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pomodoros WHERE task_id = $1 ORDER BY id");
        sqlx::query_as::<_, Pomodoro>(&query)
            .bind(task_id)
            .fetch_all(pool)
            .await
    }

    /// Update a pomodoro. Only non-`None` fields in `input` are applied;
    /// `updated_at` is always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePomodoro,
    ) -> Result<Option<Pomodoro>, sqlx::Error> {
        let query = format!(
            "UPDATE pomodoros SET
                started_at = COALESCE($2, started_at),
                duration_minutes = COALESCE($3, duration_minutes),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Pomodoro>(&query)
            .bind(id)
            .bind(input.started_at)
            .bind(input.duration_minutes)
            .fetch_optional(pool)
            .await
    }

    /// Delete a pomodoro by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pomodoros WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
