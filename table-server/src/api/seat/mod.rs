//! Seat API 模块

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/seat", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::set_seat))
        .route("/options", get(handler::options))
}
