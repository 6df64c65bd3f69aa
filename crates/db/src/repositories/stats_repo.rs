//! Status-count aggregation queries backing the stats endpoints.

use serde::Serialize;
use sqlx::{PgPool, Row};

use crate::models::status::{ProjectStatus, StatusId, TaskStatus};

/// Project counts partitioned by status.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct ProjectStatusCounts {
    pub total: i64,
    pub active: i64,
    pub completed: i64,
    pub on_hold: i64,
}

/// Task counts partitioned by status.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct TaskStatusCounts {
    pub total: i64,
    pub todo: i64,
    pub in_progress: i64,
    pub done: i64,
}

/// Aggregate queries. One `GROUP BY status_id` round trip per entity kind.
pub struct StatsRepo;

impl StatsRepo {
    /// Count projects per status.
    pub async fn project_counts(pool: &PgPool) -> Result<ProjectStatusCounts, sqlx::Error> {
        let rows = sqlx::query("SELECT status_id, COUNT(*) AS n FROM projects GROUP BY status_id")
            .fetch_all(pool)
            .await?;

        let mut counts = ProjectStatusCounts::default();
        for row in rows {
            let status_id: StatusId = row.try_get("status_id")?;
            let n: i64 = row.try_get("n")?;
            counts.total += n;
            match status_id {
                s if s == ProjectStatus::Active.id() => counts.active = n,
                s if s == ProjectStatus::Completed.id() => counts.completed = n,
                s if s == ProjectStatus::OnHold.id() => counts.on_hold = n,
                // Unknown status ids still count towards the total.
                _ => {}
            }
        }
        Ok(counts)
    }

    /// Count tasks per status.
    pub async fn task_counts(pool: &PgPool) -> Result<TaskStatusCounts, sqlx::Error> {
        let rows = sqlx::query("SELECT status_id, COUNT(*) AS n FROM tasks GROUP BY status_id")
            .fetch_all(pool)
            .await?;

        let mut counts = TaskStatusCounts::default();
        for row in rows {
            let status_id: StatusId = row.try_get("status_id")?;
            let n: i64 = row.try_get("n")?;
            counts.total += n;
            match status_id {
                s if s == TaskStatus::Todo.id() => counts.todo = n,
                s if s == TaskStatus::InProgress.id() => counts.in_progress = n,
                s if s == TaskStatus::Done.id() => counts.done = n,
                _ => {}
            }
        }
        Ok(counts)
    }
}
