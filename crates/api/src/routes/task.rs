//! Route definitions for the `/tasks` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{stats, task};
use crate::state::AppState;

/// Routes mounted at `/tasks`.
///
/// ```text
/// GET    /                        -> list (paged)
/// POST   /                        -> create
/// GET    /stats                   -> task_stats
/// GET    /{id}                    -> get_by_id (includes pomodoros)
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
/// GET    /{task_id}/pomodoros     -> list_pomodoros
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(task::list).post(task::create))
        .route("/stats", get(stats::task_stats))
        .route(
            "/{id}",
            get(task::get_by_id).put(task::update).delete(task::delete),
        )
        .route("/{task_id}/pomodoros", get(task::list_pomodoros))
}
