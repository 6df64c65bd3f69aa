//! Shared domain types for the FocusFlow backend.
//!
//! Kept deliberately small: identifier/timestamp aliases, the domain error
//! taxonomy, and pagination helpers used by the repository layer.

pub mod error;
pub mod pagination;
pub mod types;
