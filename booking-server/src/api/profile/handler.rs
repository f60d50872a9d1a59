//! Staff Profile Handlers

use axum::{Extension, Json, extract::State};
use validator::Validate;

use crate::audit_log;
use crate::auth::CurrentStaff;
use crate::core::ServerState;
use crate::db::repository::staff;
use crate::utils::{AppError, AppResponse, AppResult, ok, ok_with_message};
use shared::models::{StaffProfile, StaffProfileUpdate};

/// GET /api/staff/profile - 获取个人资料
pub async fn show(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentStaff>,
) -> AppResult<Json<AppResponse<StaffProfile>>> {
    let profile = state.staff_service().profile(current.id).await?;
    Ok(ok(profile))
}

/// PUT /api/staff/profile - 更新个人资料
///
/// 需要提交 `current_password`；可选轮换密码和替换头像。
pub async fn update(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentStaff>,
    Json(payload): Json<StaffProfileUpdate>,
) -> AppResult<Json<AppResponse<StaffProfile>>> {
    payload.validate()?;

    let staff_row = staff::find_by_id(&state.pool, current.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Staff {} not found", current.id)))?;

    let rotated_password = payload.new_password.is_some();
    let updated = state
        .staff_service()
        .update_profile(&staff_row, payload)
        .await?;

    let user_id = updated.id.to_string();
    audit_log!(
        user_id.as_str(),
        "update_profile",
        user_id.as_str(),
        format!("password_rotated={rotated_password}")
    );

    Ok(ok_with_message(
        StaffProfile::from(updated),
        "Profile updated",
    ))
}
