//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`seat`] - 座席设定和座位表接口
//! - [`menu`] - 菜单浏览接口
//! - [`cart`] - 购物车接口
//! - [`orders`] - 注文确定和配膳状态接口
//! - [`call`] - 呼叫服务员接口
//! - [`status`] - LO 倒计时和时钟接口

pub mod convert;

pub mod call;
pub mod cart;
pub mod health;
pub mod menu;
pub mod orders;
pub mod seat;
pub mod status;

use crate::core::ServerState;
use axum::Router;

/// Compose the full API router
pub fn router(state: ServerState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(seat::router())
        .merge(menu::router())
        .merge(cart::router())
        .merge(orders::router())
        .merge(call::router())
        .merge(status::router())
        .with_state(state)
}

// Re-export common types for handlers
pub use crate::utils::{AppResult, ApiResponse};
