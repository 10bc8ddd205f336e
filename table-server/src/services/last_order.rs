//! Last-Order Clock
//!
//! Computes how long until the last-order (LO) cutoff: closing time minus a
//! fixed offset, in the store's business timezone. This is a pure function
//! of the current time and static configuration — recomputed on demand,
//! never cached — and it is advisory: it does not gate engine mutations.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use chrono_tz::Tz;

/// Last-order countdown configuration
///
/// `close_hour` ranges 0–24; 24 means midnight of the next calendar day.
#[derive(Debug, Clone, Copy)]
pub struct LastOrderClock {
    close_hour: u32,
    close_minute: u32,
    lo_offset_minutes: i64,
    tz: Tz,
}

impl LastOrderClock {
    pub fn new(close_hour: u32, close_minute: u32, lo_offset_minutes: i64, tz: Tz) -> Self {
        Self {
            close_hour,
            close_minute,
            lo_offset_minutes,
            tz,
        }
    }

    /// Whole minutes remaining until last order, clamped at 0
    ///
    /// Close time is *today* (business timezone) at `close_hour % 24`, rolled
    /// to the next day when `close_hour == 24`. LO = close − offset.
    pub fn minutes_remaining(&self, now: DateTime<Utc>) -> i64 {
        let local = now.with_timezone(&self.tz);

        let mut close_date = local.date_naive();
        if self.close_hour == 24 {
            close_date = close_date.succ_opt().unwrap_or(close_date);
        }
        let close_time = NaiveTime::from_hms_opt(self.close_hour % 24, self.close_minute, 0)
            .unwrap_or_else(|| {
                tracing::warn!(
                    close_hour = self.close_hour,
                    close_minute = self.close_minute,
                    "Invalid close time, falling back to 00:00"
                );
                NaiveTime::MIN
            });

        // DST gap fallback: if the local close time does not exist, use UTC
        let close_naive = close_date.and_time(close_time);
        let close = close_naive
            .and_local_timezone(self.tz)
            .latest()
            .unwrap_or_else(|| close_naive.and_utc().with_timezone(&self.tz));

        let lo_time = close - Duration::minutes(self.lo_offset_minutes);

        if local >= lo_time {
            0
        } else {
            (lo_time - local).num_minutes()
        }
    }

    /// 表示用テキスト（ラストオーダーまでの残り時間）
    pub fn display_text(&self, now: DateTime<Utc>) -> String {
        let minutes = self.minutes_remaining(now);
        if minutes <= 0 {
            "ラストオーダーまで：0分（LO到達）".to_string()
        } else {
            format!(
                "ラストオーダー（ローカル基準）まで：{}時間{:02}分",
                minutes / 60,
                minutes % 60
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Asia::Tokyo;

    fn clock() -> LastOrderClock {
        // Close at 24:00 (midnight next day), LO 30 minutes before
        LastOrderClock::new(24, 0, 30, Tokyo)
    }

    fn at(hour: u32, minute: u32) -> DateTime<Utc> {
        Tokyo
            .with_ymd_and_hms(2025, 1, 15, hour, minute, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_remaining_before_lo() {
        // 23:00, LO at 23:30 → 30 minutes left
        assert_eq!(clock().minutes_remaining(at(23, 0)), 30);
        // 22:00 → 90 minutes left
        assert_eq!(clock().minutes_remaining(at(22, 0)), 90);
    }

    #[test]
    fn test_remaining_at_and_after_lo() {
        assert_eq!(clock().minutes_remaining(at(23, 30)), 0);
        assert_eq!(clock().minutes_remaining(at(23, 45)), 0);
    }

    #[test]
    fn test_close_hour_not_midnight() {
        // Close 22:30, offset 30 → LO 22:00
        let clock = LastOrderClock::new(22, 30, 30, Tokyo);
        assert_eq!(clock.minutes_remaining(at(20, 0)), 120);
        assert_eq!(clock.minutes_remaining(at(22, 0)), 0);
        assert_eq!(clock.minutes_remaining(at(23, 0)), 0);
    }

    #[test]
    fn test_display_text() {
        assert_eq!(
            clock().display_text(at(23, 45)),
            "ラストオーダーまで：0分（LO到達）"
        );
        assert_eq!(
            clock().display_text(at(22, 0)),
            "ラストオーダー（ローカル基準）まで：1時間30分"
        );
        assert_eq!(
            clock().display_text(at(23, 25)),
            "ラストオーダー（ローカル基準）まで：0時間05分"
        );
    }
}
