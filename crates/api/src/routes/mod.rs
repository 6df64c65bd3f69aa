pub mod health;
pub mod pomodoro;
pub mod project;
pub mod task;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /projects                       list, create
/// /projects/stats                 status counts
/// /projects/{id}                  get, update, delete
/// /projects/{project_id}/tasks    tasks of a project
///
/// /tasks                          list, create
/// /tasks/stats                    status counts
/// /tasks/{id}                     get (with pomodoros), update, delete
/// /tasks/{task_id}/pomodoros      pomodoros of a task
///
/// /pomodoros                      list, create
/// /pomodoros/{id}                 get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/tasks", task::router())
        .nest("/pomodoros", pomodoro::router())
}
