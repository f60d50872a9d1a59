//! Schedule API Handlers

use axum::{Extension, Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::audit_log;
use crate::auth::CurrentStaff;
use crate::core::ServerState;
use crate::db::repository::staff;
use crate::utils::{AppError, AppResponse, AppResult, created, ok};
use shared::models::{Schedule, ScheduleSubmit, ScheduleWithStore};

/// POST /api/staff/schedule - 提交每周排班 (整批生效或整批拒绝)
pub async fn submit(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentStaff>,
    Json(payload): Json<ScheduleSubmit>,
) -> AppResult<(StatusCode, Json<AppResponse<Vec<Schedule>>>)> {
    payload.validate()?;

    let staff_row = staff::find_by_id(&state.pool, current.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Staff {} not found", current.id)))?;

    let saved = state
        .scheduling_service()
        .submit(&staff_row, &payload.schedules)
        .await
        .map_err(AppError::from)?;

    let user_id = current.id.to_string();
    audit_log!(
        user_id.as_str(),
        "submit_schedule",
        user_id.as_str(),
        format!("{} entries", saved.len())
    );

    Ok(created(saved, "Schedule registered"))
}

/// GET /api/staff/schedule - 查看排班 (含门店信息和有效标记)
pub async fn list(
    State(state): State<ServerState>,
    Extension(current): Extension<CurrentStaff>,
) -> AppResult<Json<AppResponse<Vec<ScheduleWithStore>>>> {
    let schedules = state
        .scheduling_service()
        .list_for_staff(current.id)
        .await
        .map_err(AppError::from)?;

    if schedules.is_empty() {
        return Err(AppError::not_found("No schedules found"));
    }

    Ok(ok(schedules))
}
