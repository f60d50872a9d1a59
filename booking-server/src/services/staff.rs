//! Staff Service
//!
//! Profile reads and the transactional profile update: verify the current
//! password, optionally rotate the credential and replace the profile
//! image, and apply every field change atomically.

use sqlx::SqlitePool;

use super::ImageStorage;
use crate::db::repository::staff::{self, StaffChanges};
use crate::utils::{AppError, AppResult};
use shared::models::{Staff, StaffProfile, StaffProfileUpdate};

#[derive(Clone)]
pub struct StaffService {
    pool: SqlitePool,
    images: ImageStorage,
}

impl StaffService {
    pub fn new(pool: SqlitePool, images: ImageStorage) -> Self {
        Self { pool, images }
    }

    /// Load a staff member's profile view
    pub async fn profile(&self, staff_id: i64) -> AppResult<StaffProfile> {
        let staff = staff::find_by_id(&self.pool, staff_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Staff {staff_id} not found")))?;
        Ok(staff.into())
    }

    /// Apply a profile update for the authenticated staff member
    ///
    /// The caller must prove knowledge of the current password; a mismatch
    /// rejects the request before anything is touched. A new password is
    /// hashed here and only the hash travels further down. The replaced
    /// image file is disposed of after the row update commits, and only
    /// once no staff row references it anymore.
    pub async fn update_profile(
        &self,
        current: &Staff,
        update: StaffProfileUpdate,
    ) -> AppResult<Staff> {
        let password_valid = current
            .verify_password(&update.current_password)
            .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))?;
        if !password_valid {
            tracing::warn!(user_id = current.id, "Profile update rejected - bad current password");
            return Err(AppError::invalid_credentials());
        }

        let mut changes = StaffChanges {
            name: update.name,
            email: update.email,
            address: update.address,
            phone: update.phone,
            ..Default::default()
        };

        if let Some(ref new_password) = update.new_password {
            changes.hash_pass = Some(
                Staff::hash_password(new_password)
                    .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))?,
            );
        }

        // Persist the new image before the row update; on failure the
        // orphaned file is removed again below.
        let mut stored_image = None;
        if let Some(ref payload) = update.image {
            let stored = self.images.store_base64(payload)?;
            changes.image = Some(stored.clone());
            stored_image = Some(stored);
        }

        let previous_image = current.image.clone();

        let updated = match self.apply_changes(current.id, changes).await {
            Ok(staff) => staff,
            Err(e) => {
                // Roll the stored file back unless some other row already
                // pointed at the identical image.
                if let Some(ref stored) = stored_image
                    && let Ok(0) = staff::count_with_image(&self.pool, stored).await
                {
                    self.images.remove(stored);
                }
                return Err(e);
            }
        };

        // Dispose of the replaced file once the update is committed and no
        // other row points at it (identical uploads share one file).
        if stored_image.is_some()
            && let Some(old) = previous_image
            && Some(&old) != updated.image.as_ref()
        {
            match staff::count_with_image(&self.pool, &old).await {
                Ok(0) => self.images.remove(&old),
                Ok(_) => {}
                Err(e) => tracing::warn!(error = %e, "Orphan check for replaced image failed"),
            }
        }

        tracing::info!(user_id = updated.id, "Profile updated");
        Ok(updated)
    }

    async fn apply_changes(&self, staff_id: i64, changes: StaffChanges) -> AppResult<Staff> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        let updated = staff::update_profile(&mut *tx, staff_id, changes).await?;

        tx.commit()
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
        Ok(updated)
    }
}
