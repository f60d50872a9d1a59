//! Schedule Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::Weekday;

/// A staff member's declared working window for one weekday
///
/// At most one row per `(user_id, day)`; submissions upsert.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Schedule {
    pub id: i64,
    pub user_id: i64,
    pub day: Weekday,
    /// HH:MM:SS
    pub start_time: String,
    /// HH:MM:SS
    pub end_time: String,
    /// Advisory flag: cleared by back-office processes when the window
    /// conflicts with a rule not enforced at submission time.
    pub is_valid: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// One proposed entry of a weekly schedule submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub day: Weekday,
    /// HH:MM:SS
    pub start_time: String,
    /// HH:MM:SS
    pub end_time: String,
}

/// Batch submission payload (all-or-nothing)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScheduleSubmit {
    #[validate(length(min = 1))]
    pub schedules: Vec<ScheduleEntry>,
}

/// Schedule list item joined with the owning staff member's store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ScheduleWithStore {
    pub id: i64,
    pub user_id: i64,
    pub store_name: String,
    pub store_address: String,
    pub day: Weekday,
    pub start_time: String,
    pub end_time: String,
    pub is_valid: bool,
    pub created_at: i64,
    /// Advisory marker, set for rows with `is_valid = false`
    #[cfg_attr(feature = "db", sqlx(skip))]
    pub error: Option<String>,
}
