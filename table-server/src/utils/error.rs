//! Error re-exports and response helpers
//!
//! The unified error system lives in `shared::error`; this module re-exports
//! it for handler code and adds small success-response helpers.

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

/// Wrap data in a success response
pub fn ok<T>(data: T) -> AppResult<ApiResponse<T>> {
    Ok(ApiResponse::success(data))
}

/// Wrap data in a success response with a custom message
pub fn ok_with_message<T>(message: impl Into<String>, data: T) -> AppResult<ApiResponse<T>> {
    Ok(ApiResponse::success_with_message(message, data))
}
