//! Bookings API 模块 (员工预约查询)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/staff/bookings", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::list))
}
