//! 时间工具函数 — 业务时区转换
//!
//! 存储层只接收 `i64` Unix millis，时区转换统一在这里完成。

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

/// Current wall-clock time as Unix milliseconds
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// 当前时刻 → HH:MM:SS (业务时区)
pub fn format_hms(now: DateTime<Utc>, tz: Tz) -> String {
    now.with_timezone(&tz).format("%H:%M:%S").to_string()
}
