//! HTTP handlers, one module per resource.

pub mod pomodoro;
pub mod project;
pub mod stats;
pub mod task;
