//! Seat identity
//!
//! The seat id is the sole partition key for carts, order ledgers and
//! staff-call state. Every surface (API extractors, engine, tests) goes
//! through this module — there is exactly one copy of the normalization
//! rules.
//!
//! Canonical form: one uppercase letter, a dash, a zero-padded two-digit
//! number (`C-05`). Input is forgiving: case, surrounding whitespace and a
//! missing or space separator are accepted (`c5`, `Z 99`).

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

fn seat_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([A-Z])[-\s]?(\d{1,2})$").expect("valid seat pattern"))
}

/// A validated, canonical seat id (`^[A-Z]-\d{2}$`)
///
/// Construction only succeeds through [`SeatId::normalize`] (or the
/// equivalent serde `try_from`), so holding a `SeatId` is proof of validity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SeatId(String);

impl SeatId {
    /// Normalize raw input into a canonical seat id
    ///
    /// Trims and uppercases, then matches `^([A-Z])[-\s]?(\d{1,2})$` and
    /// zero-pads the number to two digits. Returns `None` on no match —
    /// the absence of a valid seat is a normal state, not an error.
    pub fn normalize(raw: &str) -> Option<SeatId> {
        let upper = raw.trim().to_uppercase();
        let caps = seat_pattern().captures(&upper)?;
        let number: u8 = caps[2].parse().ok()?;
        Some(SeatId(format!("{}-{:02}", &caps[1], number)))
    }

    /// Strict validation for call sites that require already-canonical input
    ///
    /// True iff the candidate normalizes AND the normalized form equals the
    /// candidate after trimming and uppercasing. Rejects forms that only
    /// become canonical through padding or separator insertion (`c5`, `Z 99`).
    pub fn validate(candidate: &str) -> bool {
        match Self::normalize(candidate) {
            Some(seat) => seat.as_str() == candidate.trim().to_uppercase(),
            None => false,
        }
    }

    /// The canonical string form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<SeatId> for String {
    fn from(seat: SeatId) -> Self {
        seat.0
    }
}

impl TryFrom<String> for SeatId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        SeatId::normalize(&value).ok_or_else(|| format!("invalid seat id: {}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_pads_and_uppercases() {
        assert_eq!(SeatId::normalize("c5").unwrap().as_str(), "C-05");
        assert_eq!(SeatId::normalize("C-05").unwrap().as_str(), "C-05");
        assert_eq!(SeatId::normalize("Z 99").unwrap().as_str(), "Z-99");
        assert_eq!(SeatId::normalize("  a-1  ").unwrap().as_str(), "A-01");
    }

    #[test]
    fn test_normalize_rejects_malformed() {
        assert_eq!(SeatId::normalize(""), None);
        assert_eq!(SeatId::normalize("11-A"), None);
        assert_eq!(SeatId::normalize("AB-01"), None);
        assert_eq!(SeatId::normalize("C-123"), None);
        assert_eq!(SeatId::normalize("C-"), None);
        assert_eq!(SeatId::normalize("テーブル5"), None);
    }

    #[test]
    fn test_validate_requires_canonical_shape() {
        assert!(SeatId::validate("C-05"));
        assert!(SeatId::validate("c-05"));
        // Normalizable but not canonical: padding or separator would change it
        assert!(!SeatId::validate("c5"));
        assert!(!SeatId::validate("C-5"));
        assert!(!SeatId::validate("Z 99"));
        assert!(!SeatId::validate(""));
    }

    #[test]
    fn test_serde_roundtrip() {
        let seat = SeatId::normalize("b12").unwrap();
        let json = serde_json::to_string(&seat).unwrap();
        assert_eq!(json, "\"B-12\"");

        let parsed: SeatId = serde_json::from_str("\"c5\"").unwrap();
        assert_eq!(parsed.as_str(), "C-05");

        let bad: Result<SeatId, _> = serde_json::from_str("\"11-A\"");
        assert!(bad.is_err());
    }

    #[test]
    fn test_display() {
        let seat = SeatId::normalize("a1").unwrap();
        assert_eq!(format!("席：{}", seat), "席：A-01");
    }
}
