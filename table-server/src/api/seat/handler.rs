//! Seat API Handlers

use axum::Json;
use serde::Deserialize;

use crate::api::convert::parse_seat;
use crate::services::seating;
use crate::utils::{ApiResponse, AppResult, ok_with_message};
use shared::models::SeatOption;
use shared::seat::SeatId;

#[derive(Debug, Deserialize)]
pub struct SetSeatRequest {
    pub seat_id: String,
}

/// POST /api/seat - 座席を設定（正規化して返す）
pub async fn set_seat(
    Json(payload): Json<SetSeatRequest>,
) -> AppResult<ApiResponse<SeatId>> {
    let seat = parse_seat(&payload.seat_id)?;
    ok_with_message(format!("座席を設定しました：{}", seat), seat)
}

/// GET /api/seat/options - 座席一覧（フロアプラン）
pub async fn options() -> Json<Vec<SeatOption>> {
    Json(seating::seat_options())
}
