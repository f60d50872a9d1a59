//! Booking API Handlers

use axum::{Json, extract::State};

use crate::auth::CurrentStaff;
use crate::core::ServerState;
use crate::db::repository::booking;
use crate::utils::{AppError, AppResponse, AppResult, ok};
use shared::models::BookingWithStore;

/// GET /api/staff/bookings - 员工名下的预约列表 (含门店信息)
pub async fn list(
    State(state): State<ServerState>,
    current: CurrentStaff,
) -> AppResult<Json<AppResponse<Vec<BookingWithStore>>>> {
    let bookings = booking::find_for_user_with_store(&state.pool, current.id).await?;

    if bookings.is_empty() {
        return Err(AppError::not_found("No bookings found"));
    }

    Ok(ok(bookings))
}
