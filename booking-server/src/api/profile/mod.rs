//! Staff Profile API 模块 (个人资料)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/staff/profile", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/", get(handler::show).put(handler::update))
}
