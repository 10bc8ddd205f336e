//! Orders API 模块

mod handler;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route(
            "/{seat}",
            get(handler::list).delete(handler::clear_history),
        )
        .route("/{seat}/confirm", post(handler::confirm))
        .route("/{seat}/delivery", get(handler::delivery_status))
        .route("/{seat}/{record_id}", delete(handler::remove_record))
        .route("/{seat}/{record_id}/delivered", post(handler::toggle_delivered))
}
