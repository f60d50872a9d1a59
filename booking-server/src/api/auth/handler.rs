//! Authentication Handlers
//!
//! Handles staff login and current-user lookup

use std::time::Duration;

use axum::{Extension, Json, extract::State};
use validator::Validate;

use crate::audit_log;
use crate::auth::CurrentStaff;
use crate::core::ServerState;
use crate::db::repository::staff;
use crate::utils::{AppError, AppResponse, AppResult, ok};
use shared::models::{LoginRequest, LoginResponse, StaffProfile};

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

/// Login handler
///
/// Authenticates staff credentials and returns a JWT token
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<AppResponse<LoginResponse>>> {
    req.validate()?;
    let email = req.email.clone();

    let staff = staff::find_by_email(&state.pool, &email).await?;

    // Fixed delay to prevent timing attacks (before checking result)
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    // Check authentication result - unified error message to prevent
    // account enumeration
    let staff = match staff {
        Some(s) => {
            // Staff found - check active status
            if !s.is_active {
                return Err(AppError::forbidden("Account has been disabled".to_string()));
            }

            // Verify password
            let password_valid = s
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

            if !password_valid {
                audit_log!("anonymous", "login_failed", &email, "invalid_credentials");
                tracing::warn!(email = %email, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }

            s
        }
        None => {
            audit_log!("anonymous", "login_failed", &email, "staff_not_found");
            tracing::warn!(email = %email, "Login failed - staff not found");
            return Err(AppError::invalid_credentials());
        }
    };

    // Generate JWT token
    let jwt_service = state.get_jwt_service();
    let token = jwt_service
        .generate_token(&staff)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    let user_id = staff.id.to_string();
    audit_log!(user_id.as_str(), "login", user_id.as_str());

    tracing::info!(
        user_id = %user_id,
        email = %staff.email,
        store_id = staff.store_id,
        "Staff logged in successfully"
    );

    let response = LoginResponse {
        token,
        staff: staff.into(),
    };

    Ok(ok(response))
}

/// Get current staff info
pub async fn me(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentStaff>,
) -> AppResult<Json<AppResponse<StaffProfile>>> {
    let profile = state.staff_service().profile(current.id).await?;
    Ok(ok(profile))
}
