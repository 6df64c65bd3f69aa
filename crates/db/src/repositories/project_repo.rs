//! Repository for the `projects` table.

use sqlx::PgPool;

use focusflow_core::pagination::{clamp_page, clamp_page_size, page_offset};
use focusflow_core::types::DbId;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, image_url, background_color, status_id, due_date, \
                       created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// If `status_id` is `None` in the input, defaults to 1 (Active).
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name, description, image_url, background_color, status_id, due_date)
             VALUES ($1, $2, $3, $4, COALESCE($5, 1), $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.background_color)
            .bind(input.status_id)
            .bind(input.due_date)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a page of projects in stored (insertion) order.
    ///
    /// `page` is 1-based; `page_size` has a default but no upper bound.
    pub async fn list(
        pool: &PgPool,
        page: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let page = clamp_page(page);
        let page_size = clamp_page_size(page_size);
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, Project>(&query)
            .bind(page_size)
            .bind(page_offset(page, page_size))
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only non-`None` fields in `input` are applied;
    /// `updated_at` is always refreshed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                image_url = COALESCE($4, image_url),
                background_color = COALESCE($5, background_color),
                status_id = COALESCE($6, status_id),
                due_date = COALESCE($7, due_date),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.image_url)
            .bind(&input.background_color)
            .bind(input.status_id)
            .bind(input.due_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project together with its tasks and their pomodoros.
    ///
    /// The three deletes run inside one transaction; the `Transaction` guard
    /// rolls back on any early exit, so a partial delete never commits.
    /// Returns `true` if the project row existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "DELETE FROM pomodoros
             WHERE task_id IN (SELECT id FROM tasks WHERE project_id = $1)",
        )
        .bind(id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM tasks WHERE project_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
