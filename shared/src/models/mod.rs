//! Data models
//!
//! Shared between booking-server and frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).
//! Time-of-day fields are `HH:MM:SS` strings; timestamps are Unix millis.

pub mod booking;
pub mod schedule;
pub mod staff;
pub mod store;

// Re-exports
pub use booking::*;
pub use schedule::*;
pub use staff::*;
pub use store::*;
