//! Shared types for the booking backend
//!
//! Data models and request/response DTOs used by both the server and API
//! clients. DB row derives are gated behind the `db` feature so client
//! builds stay free of sqlx.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
