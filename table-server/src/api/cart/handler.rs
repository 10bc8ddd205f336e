//! Cart API Handlers
//!
//! Every mutation returns the resulting cart snapshot, mirroring what the
//! terminal renders after the operation.

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::api::convert::parse_seat;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{CartSnapshot, DeliveryStatus};

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub item_id: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i64,
}

/// Cart view plus live delivery totals for the seat
#[derive(Debug, Serialize)]
pub struct CartStatusResponse {
    pub cart: CartSnapshot,
    pub delivery: DeliveryStatus,
}

/// GET /api/cart/{seat} - カートと配膳状況のスナップショット
pub async fn get_snapshot(
    State(state): State<ServerState>,
    Path(seat): Path<String>,
) -> AppResult<Json<CartStatusResponse>> {
    let seat = parse_seat(&seat)?;
    let cart = state.sessions.cart_snapshot(&seat)?;
    let delivery = state.sessions.summarize(&seat)?;
    Ok(Json(CartStatusResponse { cart, delivery }))
}

/// POST /api/cart/{seat}/items - 商品を1点追加
pub async fn add_item(
    State(state): State<ServerState>,
    Path(seat): Path<String>,
    Json(payload): Json<AddItemRequest>,
) -> AppResult<Json<CartSnapshot>> {
    let seat = parse_seat(&seat)?;
    if payload.item_id.trim().is_empty() {
        return Err(AppError::with_message(
            ErrorCode::RequiredField,
            "item_id is required",
        ));
    }
    let snapshot = state.sessions.add_to_cart(&seat, payload.item_id.trim())?;
    Ok(Json(snapshot))
}

/// PUT /api/cart/{seat}/items/{item_id} - 数量変更（0以下で削除）
pub async fn update_quantity(
    State(state): State<ServerState>,
    Path((seat, item_id)): Path<(String, String)>,
    Json(payload): Json<UpdateQuantityRequest>,
) -> AppResult<Json<CartSnapshot>> {
    let seat = parse_seat(&seat)?;
    let snapshot = state
        .sessions
        .set_quantity(&seat, &item_id, payload.quantity)?;
    Ok(Json(snapshot))
}

/// DELETE /api/cart/{seat}/items/{item_id} - 行を削除
pub async fn remove_item(
    State(state): State<ServerState>,
    Path((seat, item_id)): Path<(String, String)>,
) -> AppResult<Json<CartSnapshot>> {
    let seat = parse_seat(&seat)?;
    let snapshot = state.sessions.remove_from_cart(&seat, &item_id)?;
    Ok(Json(snapshot))
}
