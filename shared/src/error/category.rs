//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Seat errors
/// - 2xxx: Cart errors
/// - 3xxx: Order errors
/// - 4xxx: Staff call errors
/// - 5xxx: Menu errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Seat errors (1xxx)
    Seat,
    /// Cart errors (2xxx)
    Cart,
    /// Order errors (3xxx)
    Order,
    /// Staff call errors (4xxx)
    Call,
    /// Menu errors (5xxx)
    Menu,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Seat,
            2000..3000 => Self::Cart,
            3000..4000 => Self::Order,
            4000..5000 => Self::Call,
            5000..6000 => Self::Menu,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Seat => "seat",
            Self::Cart => "cart",
            Self::Order => "order",
            Self::Call => "call",
            Self::Menu => "menu",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
