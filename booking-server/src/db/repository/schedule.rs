//! Schedule Repository

use super::{RepoError, RepoResult};
use shared::models::{Schedule, ScheduleWithStore, Weekday};

const COLUMNS: &str = "id, user_id, day, start_time, end_time, is_valid, created_at, updated_at";

pub async fn find_by_id(ex: impl sqlx::Executor<'_, Database = sqlx::Sqlite>, id: i64) -> RepoResult<Option<Schedule>> {
    let schedule = sqlx::query_as::<_, Schedule>(&format!(
        "SELECT {COLUMNS} FROM schedule WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(ex)
    .await?;
    Ok(schedule)
}

pub async fn find_by_user_day(
    ex: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    user_id: i64,
    day: Weekday,
) -> RepoResult<Option<Schedule>> {
    let schedule = sqlx::query_as::<_, Schedule>(&format!(
        "SELECT {COLUMNS} FROM schedule WHERE user_id = ? AND day = ?"
    ))
    .bind(user_id)
    .bind(day)
    .fetch_optional(ex)
    .await?;
    Ok(schedule)
}

/// Insert or overwrite the window for `(user_id, day)`
///
/// A resubmission updates the existing row in place (the `UNIQUE(user_id,
/// day)` key), restores `is_valid = 1` and keeps the original `created_at`.
pub async fn upsert_entry(
    ex: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    user_id: i64,
    day: Weekday,
    start_time: &str,
    end_time: &str,
) -> RepoResult<Schedule> {
    let now = shared::util::now_millis();
    let schedule = sqlx::query_as::<_, Schedule>(&format!(
        "INSERT INTO schedule (user_id, day, start_time, end_time, is_valid, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, 1, ?5, ?5) \
         ON CONFLICT(user_id, day) DO UPDATE SET \
             start_time = excluded.start_time, \
             end_time = excluded.end_time, \
             is_valid = 1, \
             updated_at = excluded.updated_at \
         RETURNING {COLUMNS}"
    ))
    .bind(user_id)
    .bind(day)
    .bind(start_time)
    .bind(end_time)
    .bind(now)
    .fetch_optional(ex)
    .await?;
    schedule.ok_or_else(|| RepoError::Database("Failed to upsert schedule".into()))
}

/// List a staff member's schedules in insertion order, joined with the
/// owning store's name/address
pub async fn find_for_user_with_store(
    ex: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    user_id: i64,
) -> RepoResult<Vec<ScheduleWithStore>> {
    let schedules = sqlx::query_as::<_, ScheduleWithStore>(
        "SELECT s.id, s.user_id, si.name AS store_name, si.address AS store_address, \
                s.day, s.start_time, s.end_time, s.is_valid, s.created_at \
         FROM schedule s \
         JOIN staff u ON u.id = s.user_id \
         JOIN store_information si ON si.id = u.store_id \
         WHERE s.user_id = ? \
         ORDER BY s.id",
    )
    .bind(user_id)
    .fetch_all(ex)
    .await?;
    Ok(schedules)
}

/// Mark a schedule as invalid (back-office side channel)
pub async fn invalidate(ex: impl sqlx::Executor<'_, Database = sqlx::Sqlite>, id: i64) -> RepoResult<()> {
    let now = shared::util::now_millis();
    let rows = sqlx::query("UPDATE schedule SET is_valid = 0, updated_at = ? WHERE id = ?")
        .bind(now)
        .bind(id)
        .execute(ex)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Schedule {id} not found")));
    }
    Ok(())
}
