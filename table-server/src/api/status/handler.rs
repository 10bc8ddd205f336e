//! Store Status API Handlers
//!
//! Advisory, read-only view: LO countdown and the wall clock. Recomputed on
//! every request — the clock is a pure function of now + configuration, so
//! there is nothing to cache or drift.

use axum::{Json, extract::State};
use chrono::Utc;
use serde::Serialize;

use crate::core::ServerState;
use crate::utils::time::format_hms;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub store_name: String,
    /// Whole minutes until last order (0 = LO reached)
    pub minutes_remaining: i64,
    /// 表示用テキスト（例：ラストオーダーまで：0分（LO到達））
    pub display_text: String,
    /// 現在時刻 HH:MM:SS（業務タイムゾーン）
    pub current_time: String,
}

/// GET /api/status - LO 倒计时与当前时刻
pub async fn status(State(state): State<ServerState>) -> Json<StatusResponse> {
    let now = Utc::now();
    Json(StatusResponse {
        store_name: state.config.store_name.clone(),
        minutes_remaining: state.clock.minutes_remaining(now),
        display_text: state.clock.display_text(now),
        current_time: format_hms(now, state.config.timezone),
    })
}
