//! Scheduling Service
//!
//! Validates and persists a staff member's weekly schedule against the
//! store's opening hours. A submission is all-or-nothing: every entry is
//! checked and written inside one transaction, and the first failing entry
//! rolls the whole batch back.

use chrono::NaiveTime;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::db::repository::{RepoError, opening_hour, schedule};
use crate::utils::{AppError, time};
use shared::models::{Schedule, ScheduleEntry, ScheduleWithStore, Staff, Weekday};

/// Advisory marker attached to list items whose `is_valid` flag was
/// cleared by a back-office process
const INVALID_SCHEDULE_NOTICE: &str =
    "This schedule no longer matches the store rules, please resubmit it";

/// Scheduling failures, per spec'd reason
#[derive(Debug, Error)]
pub enum SchedulingError {
    #[error("No opening hours configured for {day}")]
    OpeningHoursNotFound { day: Weekday },

    #[error(
        "Schedule {start}-{end} on {day} is outside the store opening hours {opening}-{closing}"
    )]
    OutsideOpeningHours {
        day: Weekday,
        start: String,
        end: String,
        opening: String,
        closing: String,
    },

    #[error("Invalid time format (want HH:MM:SS): {value}")]
    InvalidTime { value: String },

    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl From<SchedulingError> for AppError {
    fn from(err: SchedulingError) -> Self {
        match err {
            SchedulingError::OpeningHoursNotFound { .. } => AppError::not_found(err.to_string()),
            SchedulingError::OutsideOpeningHours { .. } => AppError::business_rule(err.to_string()),
            SchedulingError::InvalidTime { .. } => AppError::validation(err.to_string()),
            SchedulingError::Repo(repo) => repo.into(),
        }
    }
}

fn parse_time(value: &str) -> Result<NaiveTime, SchedulingError> {
    time::parse_hms(value).map_err(|_| SchedulingError::InvalidTime {
        value: value.to_string(),
    })
}

/// Weekly schedule submission and queries
#[derive(Clone)]
pub struct SchedulingService {
    pool: SqlitePool,
}

impl SchedulingService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Submit a batch of weekly schedule entries for one staff member
    ///
    /// Per entry, in submission order:
    /// 1. the staff's store must have opening hours for the entry's day;
    /// 2. the window must lie inside the store's opening window;
    /// 3. the `(user_id, day)` row is inserted or overwritten with
    ///    `is_valid = 1`.
    ///
    /// All writes commit together; any failure leaves the table untouched.
    pub async fn submit(
        &self,
        staff: &Staff,
        entries: &[ScheduleEntry],
    ) -> Result<Vec<Schedule>, SchedulingError> {
        let mut tx = self.pool.begin().await.map_err(RepoError::from)?;
        let mut saved = Vec::with_capacity(entries.len());

        for entry in entries {
            let hours = opening_hour::find_for_day(&mut *tx, staff.store_id, entry.day)
                .await?
                .ok_or(SchedulingError::OpeningHoursNotFound { day: entry.day })?;

            let start = parse_time(&entry.start_time)?;
            let end = parse_time(&entry.end_time)?;
            let opening = parse_time(&hours.opening_time)?;
            let closing = parse_time(&hours.closing_time)?;

            if start < opening || end > closing {
                return Err(SchedulingError::OutsideOpeningHours {
                    day: entry.day,
                    start: entry.start_time.clone(),
                    end: entry.end_time.clone(),
                    opening: hours.opening_time,
                    closing: hours.closing_time,
                });
            }

            let row = schedule::upsert_entry(
                &mut *tx,
                staff.id,
                entry.day,
                &entry.start_time,
                &entry.end_time,
            )
            .await?;
            saved.push(row);
        }

        tx.commit().await.map_err(RepoError::from)?;

        tracing::info!(
            user_id = staff.id,
            entries = saved.len(),
            "Schedule batch committed"
        );
        Ok(saved)
    }

    /// List a staff member's schedules in insertion order, each annotated
    /// with an advisory marker when its validity flag was cleared
    pub async fn list_for_staff(
        &self,
        staff_id: i64,
    ) -> Result<Vec<ScheduleWithStore>, SchedulingError> {
        let mut schedules = schedule::find_for_user_with_store(&self.pool, staff_id).await?;
        for item in &mut schedules {
            if !item.is_valid {
                item.error = Some(INVALID_SCHEDULE_NOTICE.to_string());
            }
        }
        Ok(schedules)
    }

    /// Mark one schedule invalid (back-office side channel)
    ///
    /// The submission path never calls this; it exists so external
    /// rule checks have a defined write instead of poking the flag
    /// directly.
    pub async fn invalidate(&self, schedule_id: i64) -> Result<(), SchedulingError> {
        schedule::invalidate(&self.pool, schedule_id).await?;
        tracing::info!(schedule_id, "Schedule marked invalid");
        Ok(())
    }
}
