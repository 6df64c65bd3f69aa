//! Row structs and create/update DTOs, one module per entity.

pub mod pomodoro;
pub mod project;
pub mod status;
pub mod task;
