//! Booking Model
//!
//! Bookings are created by the customer-facing flow; this backend only
//! reads them.

use serde::{Deserialize, Serialize};

/// Booking status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl Default for BookingStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Customer appointment assigned to a staff member
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Booking {
    pub id: i64,
    pub user_id: i64,
    /// YYYY-MM-DD
    pub day: String,
    /// HH:MM:SS
    pub time: String,
    #[serde(default)]
    pub status: BookingStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Booking list item joined with the staff member's store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct BookingWithStore {
    pub id: i64,
    pub day: String,
    pub time: String,
    pub status: BookingStatus,
    pub store_name: String,
    pub store_address: String,
}
