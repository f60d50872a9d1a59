//! Staff Repository

use super::{RepoError, RepoResult};
use shared::models::Staff;

const COLUMNS: &str =
    "id, store_id, email, name, hash_pass, image, address, phone, is_active, created_at, updated_at";

/// Create staff payload (back-office provisioning and test fixtures)
#[derive(Debug, Clone)]
pub struct StaffCreate {
    pub store_id: i64,
    pub email: String,
    pub name: String,
    pub password: String,
}

/// Field changes applied by a profile update
///
/// `hash_pass` is already hashed by the caller; the plaintext never
/// reaches this layer.
#[derive(Debug, Clone, Default)]
pub struct StaffChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image: Option<String>,
    pub hash_pass: Option<String>,
}

pub async fn find_by_id(ex: impl sqlx::Executor<'_, Database = sqlx::Sqlite>, id: i64) -> RepoResult<Option<Staff>> {
    let staff =
        sqlx::query_as::<_, Staff>(&format!("SELECT {COLUMNS} FROM staff WHERE id = ?"))
            .bind(id)
            .fetch_optional(ex)
            .await?;
    Ok(staff)
}

pub async fn find_by_email(ex: impl sqlx::Executor<'_, Database = sqlx::Sqlite>, email: &str) -> RepoResult<Option<Staff>> {
    let staff =
        sqlx::query_as::<_, Staff>(&format!("SELECT {COLUMNS} FROM staff WHERE email = ?"))
            .bind(email)
            .fetch_optional(ex)
            .await?;
    Ok(staff)
}

/// Create a new staff member
pub async fn create(ex: impl sqlx::Executor<'_, Database = sqlx::Sqlite>, data: StaffCreate) -> RepoResult<Staff> {
    let hash_pass = Staff::hash_password(&data.password)
        .map_err(|e| RepoError::Database(format!("Failed to hash password: {e}")))?;

    let now = shared::util::now_millis();
    let staff = sqlx::query_as::<_, Staff>(&format!(
        "INSERT INTO staff (store_id, email, name, hash_pass, is_active, created_at, updated_at) \
         VALUES (?1, ?2, ?3, ?4, 1, ?5, ?5) \
         RETURNING {COLUMNS}"
    ))
    .bind(data.store_id)
    .bind(&data.email)
    .bind(&data.name)
    .bind(&hash_pass)
    .bind(now)
    .fetch_optional(ex)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            RepoError::Duplicate(format!("Email '{}' already exists", data.email))
        }
        other => RepoError::from(other),
    })?;
    staff.ok_or_else(|| RepoError::Database("Failed to create staff".into()))
}

/// Apply profile field changes; untouched fields keep their value
pub async fn update_profile(
    ex: impl sqlx::Executor<'_, Database = sqlx::Sqlite>,
    id: i64,
    changes: StaffChanges,
) -> RepoResult<Staff> {
    let now = shared::util::now_millis();
    let staff = sqlx::query_as::<_, Staff>(&format!(
        "UPDATE staff SET \
             name = COALESCE(?1, name), \
             email = COALESCE(?2, email), \
             address = COALESCE(?3, address), \
             phone = COALESCE(?4, phone), \
             image = COALESCE(?5, image), \
             hash_pass = COALESCE(?6, hash_pass), \
             updated_at = ?7 \
         WHERE id = ?8 \
         RETURNING {COLUMNS}"
    ))
    .bind(changes.name)
    .bind(changes.email)
    .bind(changes.address)
    .bind(changes.phone)
    .bind(changes.image)
    .bind(changes.hash_pass)
    .bind(now)
    .bind(id)
    .fetch_optional(ex)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(ref db) if db.is_unique_violation() => {
            RepoError::Duplicate("Email already exists".to_string())
        }
        other => RepoError::from(other),
    })?;
    staff.ok_or_else(|| RepoError::NotFound(format!("Staff {id} not found")))
}

/// Count staff rows referencing a stored image file (orphan check before
/// disposing a replaced image)
pub async fn count_with_image(ex: impl sqlx::Executor<'_, Database = sqlx::Sqlite>, image: &str) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM staff WHERE image = ?")
        .bind(image)
        .fetch_one(ex)
        .await?;
    Ok(count)
}
