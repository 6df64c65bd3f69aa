//! Route definitions for the `/pomodoros` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::pomodoro;
use crate::state::AppState;

/// Routes mounted at `/pomodoros`.
///
/// ```text
/// GET    /        -> list (paged)
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pomodoro::list).post(pomodoro::create))
        .route(
            "/{id}",
            get(pomodoro::get_by_id)
                .put(pomodoro::update)
                .delete(pomodoro::delete),
        )
}
