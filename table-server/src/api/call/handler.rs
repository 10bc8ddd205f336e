//! Staff Call API Handlers

use axum::extract::{Path, State};

use crate::api::convert::parse_seat;
use crate::core::ServerState;
use crate::utils::time::now_millis;
use crate::utils::{ApiResponse, AppError, AppResult, ok_with_message};
use shared::models::CallOutcome;

/// POST /api/call/{seat} - スタッフ呼び出し
///
/// クールダウン中は 429 を返し、待ち時間（秒）を details に載せる。
/// 拒否された試行はクールダウンを延長しない。
pub async fn request_call(
    State(state): State<ServerState>,
    Path(seat): Path<String>,
) -> AppResult<ApiResponse<CallOutcome>> {
    let seat = parse_seat(&seat)?;
    let outcome = state
        .sessions
        .try_call(&seat, now_millis(), state.config.call_cooldown_ms)?;

    match outcome {
        CallOutcome::Allowed => ok_with_message(
            format!("スタッフを呼び出しました（座席：{}）", seat),
            CallOutcome::Allowed,
        ),
        CallOutcome::Throttled { remaining_seconds } => {
            Err(AppError::call_throttled(remaining_seconds))
        }
    }
}
