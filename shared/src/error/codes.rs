//! Unified error codes for the table ordering system
//!
//! Error codes are shared between the server and the terminal frontend.
//! They are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Seat errors
//! - 2xxx: Cart errors
//! - 3xxx: Order errors
//! - 4xxx: Staff call errors
//! - 5xxx: Menu errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Seat ====================
    /// Seat id does not match the canonical form
    SeatInvalid = 1001,
    /// Operation requires a seat to be set
    SeatRequired = 1002,

    // ==================== 2xxx: Cart ====================
    /// Cart has no lines
    CartEmpty = 2001,
    /// Quantity must be a positive integer
    QuantityInvalid = 2002,

    // ==================== 3xxx: Order ====================
    /// Order record not found in the seat's ledger
    OrderRecordNotFound = 3001,

    // ==================== 4xxx: Staff call ====================
    /// Staff call rejected by the cooldown window
    CallThrottled = 4001,

    // ==================== 5xxx: Menu ====================
    /// Menu item not found in the catalog
    MenuItemNotFound = 5001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Storage error
    StorageError = 9002,
    /// Configuration error
    ConfigError = 9005,

    // ==================== 94xx: Storage ====================
    /// Storage full (disk space insufficient)
    StorageFull = 9401,
    /// Storage corrupted (data file damaged)
    StorageCorrupted = 9403,
    /// System busy (IO error, retry later)
    SystemBusy = 9404,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Seat
            ErrorCode::SeatInvalid => "Seat id is invalid",
            ErrorCode::SeatRequired => "Seat id is required",

            // Cart
            ErrorCode::CartEmpty => "Cart is empty",
            ErrorCode::QuantityInvalid => "Quantity must be positive",

            // Order
            ErrorCode::OrderRecordNotFound => "Order record not found",

            // Staff call
            ErrorCode::CallThrottled => "Staff call is in cooldown",

            // Menu
            ErrorCode::MenuItemNotFound => "Menu item not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::StorageError => "Storage error",
            ErrorCode::ConfigError => "Configuration error",

            // Storage
            ErrorCode::StorageFull => "Storage full (disk space insufficient)",
            ErrorCode::StorageCorrupted => "Storage corrupted (data file damaged)",
            ErrorCode::SystemBusy => "System busy, please retry later",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Seat
            1001 => Ok(ErrorCode::SeatInvalid),
            1002 => Ok(ErrorCode::SeatRequired),

            // Cart
            2001 => Ok(ErrorCode::CartEmpty),
            2002 => Ok(ErrorCode::QuantityInvalid),

            // Order
            3001 => Ok(ErrorCode::OrderRecordNotFound),

            // Staff call
            4001 => Ok(ErrorCode::CallThrottled),

            // Menu
            5001 => Ok(ErrorCode::MenuItemNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::StorageError),
            9005 => Ok(ErrorCode::ConfigError),

            // Storage
            9401 => Ok(ErrorCode::StorageFull),
            9403 => Ok(ErrorCode::StorageCorrupted),
            9404 => Ok(ErrorCode::SystemBusy),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::SeatInvalid.code(), 1001);
        assert_eq!(ErrorCode::CartEmpty.code(), 2001);
        assert_eq!(ErrorCode::QuantityInvalid.code(), 2002);
        assert_eq!(ErrorCode::OrderRecordNotFound.code(), 3001);
        assert_eq!(ErrorCode::CallThrottled.code(), 4001);
        assert_eq!(ErrorCode::MenuItemNotFound.code(), 5001);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
        assert_eq!(ErrorCode::StorageFull.code(), 9401);
        assert_eq!(ErrorCode::SystemBusy.code(), 9404);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::Unknown.is_success());
        assert!(!ErrorCode::CartEmpty.is_success());
    }

    #[test]
    fn test_try_from_valid() {
        assert_eq!(ErrorCode::try_from(0), Ok(ErrorCode::Success));
        assert_eq!(ErrorCode::try_from(1001), Ok(ErrorCode::SeatInvalid));
        assert_eq!(ErrorCode::try_from(2001), Ok(ErrorCode::CartEmpty));
        assert_eq!(ErrorCode::try_from(4001), Ok(ErrorCode::CallThrottled));
        assert_eq!(ErrorCode::try_from(9404), Ok(ErrorCode::SystemBusy));
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(4), Err(InvalidErrorCode(4)));
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(10000), Err(InvalidErrorCode(10000)));
    }

    #[test]
    fn test_serialize_as_number() {
        assert_eq!(serde_json::to_string(&ErrorCode::Success).unwrap(), "0");
        assert_eq!(serde_json::to_string(&ErrorCode::CartEmpty).unwrap(), "2001");
        assert_eq!(
            serde_json::to_string(&ErrorCode::CallThrottled).unwrap(),
            "4001"
        );
    }

    #[test]
    fn test_deserialize_roundtrip() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::SeatInvalid,
            ErrorCode::CartEmpty,
            ErrorCode::OrderRecordNotFound,
            ErrorCode::CallThrottled,
            ErrorCode::InternalError,
        ];

        for code in codes {
            let json = serde_json::to_string(&code).unwrap();
            let parsed: ErrorCode = serde_json::from_str(&json).unwrap();
            assert_eq!(code, parsed);
        }
    }

    #[test]
    fn test_message() {
        assert_eq!(ErrorCode::CartEmpty.message(), "Cart is empty");
        assert_eq!(ErrorCode::SeatInvalid.message(), "Seat id is invalid");
        assert_eq!(ErrorCode::InternalError.message(), "Internal server error");
    }
}
