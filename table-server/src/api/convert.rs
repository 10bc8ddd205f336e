//! Request parameter conversion helpers

use shared::error::{AppError, AppResult};
use shared::seat::SeatId;

/// Normalize a raw seat path/body parameter
///
/// Malformed seats are rejected before any store access.
pub fn parse_seat(raw: &str) -> AppResult<SeatId> {
    SeatId::normalize(raw).ok_or_else(|| AppError::invalid_seat(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_parse_seat_normalizes() {
        assert_eq!(parse_seat("c5").unwrap().as_str(), "C-05");
        assert_eq!(parse_seat("B-12").unwrap().as_str(), "B-12");
    }

    #[test]
    fn test_parse_seat_rejects_malformed() {
        let err = parse_seat("11-A").unwrap_err();
        assert_eq!(err.code, ErrorCode::SeatInvalid);
    }
}
