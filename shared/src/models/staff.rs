//! Staff Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Staff member row, scoped to one store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Staff {
    pub id: i64,
    pub store_id: i64,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing)]
    pub hash_pass: String,
    pub image: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

fn default_true() -> bool {
    true
}

impl Staff {
    /// Verify password using argon2
    pub fn verify_password(&self, password: &str) -> Result<bool, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHash, PasswordVerifier},
        };

        let parsed_hash = PasswordHash::new(&self.hash_pass)?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash password using argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        use argon2::{
            Argon2,
            password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
        };

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let password_hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(password_hash.to_string())
    }
}

/// Staff profile response (安全视图，不含密码散列)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffProfile {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub image: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub store_id: i64,
    pub created_at: i64,
}

impl From<Staff> for StaffProfile {
    fn from(s: Staff) -> Self {
        Self {
            id: s.id,
            email: s.email,
            name: s.name,
            image: s.image,
            address: s.address,
            phone: s.phone,
            store_id: s.store_id,
            created_at: s.created_at,
        }
    }
}

/// Profile update payload
///
/// `current_password` is always required; `new_password` rotates the
/// stored credential, `image` carries a base64-encoded replacement photo.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StaffProfileUpdate {
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 500))]
    pub address: Option<String>,
    #[validate(length(max = 100))]
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 128))]
    pub current_password: String,
    #[validate(length(min = 8, max = 128))]
    pub new_password: Option<String>,
    /// Base64-encoded image payload (PNG/JPEG/WebP)
    pub image: Option<String>,
}

/// Login payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// Login response: token + staff info snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub staff: StaffProfile,
}
