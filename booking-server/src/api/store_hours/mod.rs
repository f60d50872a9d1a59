//! Store Hours API 模块 (门店营业时间)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/staff/store-hours", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::show))
}
