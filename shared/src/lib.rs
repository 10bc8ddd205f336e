//! Shared domain types for the table ordering system
//!
//! This crate holds everything the server and any future client crate agree
//! on:
//!
//! - [`seat`]: seat id normalization and validation (the single copy)
//! - [`models`]: menu, cart, order, delivery and staff-call models
//! - [`error`]: unified error codes, [`error::AppError`] and the
//!   [`error::ApiResponse`] envelope
//! - [`types`]: common type aliases

pub mod error;
pub mod models;
pub mod seat;
pub mod types;

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use seat::SeatId;
pub use types::Timestamp;
