//! Store Model

use serde::{Deserialize, Serialize};

/// Day of week, stored lowercase in both JSON and the database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
            Weekday::Saturday => "saturday",
            Weekday::Sunday => "sunday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Store information entity (one per tenant store)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct StoreInformation {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Per-store, per-weekday opening window
///
/// Invariant (enforced by the schema): `opening_time < closing_time`,
/// one row per `(store_id, day)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OpeningHour {
    pub id: i64,
    pub store_id: i64,
    pub day: Weekday,
    /// HH:MM:SS
    pub opening_time: String,
    /// HH:MM:SS
    pub closing_time: String,
}

/// One item of the store-hours listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OpeningHourEntry {
    pub day: Weekday,
    pub opening_time: String,
    pub closing_time: String,
}

/// Response payload for the store opening-hours endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreOpeningHours {
    pub store_id: i64,
    pub store_name: String,
    pub data: Vec<OpeningHourEntry>,
}
