//! Store Repository

use super::{RepoError, RepoResult};
use shared::models::StoreInformation;

pub async fn find_by_id(
    ex: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    id: i64,
) -> RepoResult<Option<StoreInformation>> {
    let store = sqlx::query_as::<_, StoreInformation>(
        "SELECT id, name, address, phone, email, created_at, updated_at FROM store_information WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(ex)
    .await?;
    Ok(store)
}

pub async fn create(
    ex: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    name: &str,
    address: &str,
) -> RepoResult<StoreInformation> {
    let now = shared::util::now_millis();
    let store = sqlx::query_as::<_, StoreInformation>(
        "INSERT INTO store_information (name, address, created_at, updated_at) VALUES (?, ?, ?, ?) RETURNING id, name, address, phone, email, created_at, updated_at",
    )
    .bind(name)
    .bind(address)
    .bind(now)
    .bind(now)
    .fetch_optional(ex)
    .await?;
    store.ok_or_else(|| RepoError::Database("Failed to create store".into()))
}
