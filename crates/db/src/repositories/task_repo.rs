//! Repository for the `tasks` table.

use sqlx::PgPool;

use focusflow_core::pagination::{clamp_page, clamp_page_size, page_offset};
use focusflow_core::types::DbId;

use crate::models::task::{CreateTask, Task, UpdateTask};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, description, status_id, deadline, created_at, updated_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    ///
    /// If `status_id` is `None` in the input, defaults to 1 (Todo). A
    /// `project_id` that does not exist surfaces as a foreign-key failure
    /// from the database; there is no pre-check.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks (project_id, description, status_id, deadline)
             VALUES ($1, $2, COALESCE($3, 1), $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.project_id)
            .bind(&input.description)
            .bind(input.status_id)
            .bind(input.deadline)
            .fetch_one(pool)
            .await
    }

    /// Find a task by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a page of tasks in stored (insertion) order.
    pub async fn list(
        pool: &PgPool,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let page = clamp_page(page);
        let page_size = clamp_page_size(page_size);
        let query = format!("SELECT {COLUMNS} FROM tasks ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Task>(&query)
            .bind(page_size)
            .bind(page_offset(page, page_size))
            .fetch_all(pool)
            .await
    }

    /// List all tasks belonging to a project, in stored order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE project_id = $1 ORDER BY id");
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a task. Only non-`None` fields in `input` are applied;
    /// `updated_at` is always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                description = COALESCE($2, description),
                status_id = COALESCE($3, status_id),
                deadline = COALESCE($4, deadline),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.description)
            .bind(input.status_id)
            .bind(input.deadline)
            .fetch_optional(pool)
            .await
    }

    /// Delete a task by ID. Its pomodoros go with it via the
    /// `ON DELETE CASCADE` foreign key. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
