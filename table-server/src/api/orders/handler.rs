//! Orders API Handlers
//!
//! Confirmation, ledger listing, delivery toggling and history management.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

use crate::api::convert::parse_seat;
use crate::core::ServerState;
use crate::utils::{ApiResponse, AppResult, ok_with_message};
use shared::models::{DeliveryStatus, OrderFilter, OrderRecord};

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub filter: Option<OrderFilter>,
}

/// POST /api/orders/{seat}/confirm - カートを注文として確定
///
/// カートが空の場合は確定せず、カート・履歴とも変更されない。
pub async fn confirm(
    State(state): State<ServerState>,
    Path(seat): Path<String>,
) -> AppResult<ApiResponse<Vec<OrderRecord>>> {
    let seat = parse_seat(&seat)?;
    let records = state.sessions.confirm(&seat)?;
    ok_with_message("注文を確定しました", records)
}

/// GET /api/orders/{seat}?filter=all|pending|delivered - 注文履歴（新しい順）
pub async fn list(
    State(state): State<ServerState>,
    Path(seat): Path<String>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<OrderRecord>>> {
    let seat = parse_seat(&seat)?;
    let records = state
        .sessions
        .list(&seat, query.filter.unwrap_or_default())?;
    Ok(Json(records))
}

/// POST /api/orders/{seat}/{record_id}/delivered - 配膳フラグを切り替え
pub async fn toggle_delivered(
    State(state): State<ServerState>,
    Path((seat, record_id)): Path<(String, String)>,
) -> AppResult<ApiResponse<OrderRecord>> {
    let seat = parse_seat(&seat)?;
    let record = state.sessions.toggle_delivered(&seat, &record_id)?;
    let message = if record.delivered {
        "配膳済みにしました"
    } else {
        "未配膳に戻しました"
    };
    ok_with_message(message, record)
}

/// DELETE /api/orders/{seat}/{record_id} - 注文を1件削除
pub async fn remove_record(
    State(state): State<ServerState>,
    Path((seat, record_id)): Path<(String, String)>,
) -> AppResult<Json<bool>> {
    let seat = parse_seat(&seat)?;
    let removed = state.sessions.remove_record(&seat, &record_id)?;
    Ok(Json(removed))
}

/// DELETE /api/orders/{seat} - 注文履歴をクリア
pub async fn clear_history(
    State(state): State<ServerState>,
    Path(seat): Path<String>,
) -> AppResult<ApiResponse<()>> {
    let seat = parse_seat(&seat)?;
    state.sessions.clear_history(&seat)?;
    ok_with_message("注文履歴をクリアしました", ())
}

/// GET /api/orders/{seat}/delivery - 配膳状況（配膳済み・未配膳の点数）
pub async fn delivery_status(
    State(state): State<ServerState>,
    Path(seat): Path<String>,
) -> AppResult<Json<DeliveryStatus>> {
    let seat = parse_seat(&seat)?;
    let status = state.sessions.summarize(&seat)?;
    Ok(Json(status))
}
