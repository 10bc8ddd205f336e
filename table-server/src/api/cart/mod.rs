//! Cart API 模块

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/cart", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/{seat}", get(handler::get_snapshot))
        .route("/{seat}/items", post(handler::add_item))
        .route(
            "/{seat}/items/{item_id}",
            put(handler::update_quantity).delete(handler::remove_item),
        )
}
