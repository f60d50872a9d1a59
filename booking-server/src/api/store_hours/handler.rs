//! Store Hours Handlers

use axum::{Json, extract::State};

use crate::auth::CurrentStaff;
use crate::core::ServerState;
use crate::db::repository::{opening_hour, store};
use crate::utils::{AppError, AppResponse, AppResult, ok};
use shared::models::StoreOpeningHours;

/// GET /api/staff/store-hours - 当前员工所属门店的营业时间
pub async fn show(
    State(state): State<ServerState>,
    current: CurrentStaff,
) -> AppResult<Json<AppResponse<StoreOpeningHours>>> {
    let store = store::find_by_id(&state.pool, current.store_id)
        .await?
        .ok_or_else(|| AppError::not_found("Store not found"))?;

    let hours = opening_hour::find_all_for_store(&state.pool, store.id).await?;
    if hours.is_empty() {
        return Err(AppError::not_found("No opening hours configured"));
    }

    Ok(ok(StoreOpeningHours {
        store_id: store.id,
        store_name: store.name,
        data: hours,
    }))
}
