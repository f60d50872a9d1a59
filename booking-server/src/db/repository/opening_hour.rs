//! Opening Hour Repository

use super::{RepoError, RepoResult};
use shared::models::{OpeningHour, OpeningHourEntry, Weekday};

pub async fn find_for_day(
    ex: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    store_id: i64,
    day: Weekday,
) -> RepoResult<Option<OpeningHour>> {
    let hour = sqlx::query_as::<_, OpeningHour>(
        "SELECT id, store_id, day, opening_time, closing_time FROM opening_hour WHERE store_id = ? AND day = ?",
    )
    .bind(store_id)
    .bind(day)
    .fetch_optional(ex)
    .await?;
    Ok(hour)
}

pub async fn find_all_for_store(
    ex: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    store_id: i64,
) -> RepoResult<Vec<OpeningHourEntry>> {
    let hours = sqlx::query_as::<_, OpeningHourEntry>(
        "SELECT day, opening_time, closing_time FROM opening_hour WHERE store_id = ? ORDER BY id",
    )
    .bind(store_id)
    .fetch_all(ex)
    .await?;
    Ok(hours)
}

/// Set a store's window for one weekday (one row per `(store_id, day)`)
pub async fn upsert(
    ex: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    store_id: i64,
    day: Weekday,
    opening_time: &str,
    closing_time: &str,
) -> RepoResult<OpeningHour> {
    if opening_time >= closing_time {
        return Err(RepoError::Validation(format!(
            "opening_time must be before closing_time ({opening_time} >= {closing_time})"
        )));
    }

    let hour = sqlx::query_as::<_, OpeningHour>(
        "INSERT INTO opening_hour (store_id, day, opening_time, closing_time) VALUES (?1, ?2, ?3, ?4) \
         ON CONFLICT(store_id, day) DO UPDATE SET opening_time = excluded.opening_time, closing_time = excluded.closing_time \
         RETURNING id, store_id, day, opening_time, closing_time",
    )
    .bind(store_id)
    .bind(day)
    .bind(opening_time)
    .bind(closing_time)
    .fetch_optional(ex)
    .await?;
    hour.ok_or_else(|| RepoError::Database("Failed to upsert opening hour".into()))
}
