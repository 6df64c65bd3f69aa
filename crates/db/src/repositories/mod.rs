//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod pomodoro_repo;
pub mod project_repo;
pub mod stats_repo;
pub mod task_repo;

pub use pomodoro_repo::PomodoroRepo;
pub use project_repo::ProjectRepo;
pub use stats_repo::StatsRepo;
pub use task_repo::TaskRepo;
