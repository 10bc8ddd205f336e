//! Midori Table Server - 居酒屋桌边点餐终端服务
//!
//! # 架构概述
//!
//! 本模块是桌边点餐终端的服务端，提供以下核心功能：
//!
//! - **座位会话引擎** (`session`): 购物车、注文台账、配膳状态、呼叫冷却
//! - **菜单目录** (`services/catalog`): 只读协作方，查询降级为未知商品
//! - **LO 时钟** (`services/last_order`): ラストオーダー倒计时
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! table-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── session/       # 座位会话引擎 (redb 存储)
//! ├── services/      # 菜单目录、LO 时钟、座位表
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志、时间、错误工具
//! ```

pub mod api;
pub mod core;
pub mod services;
pub mod session;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use services::{DummyCatalog, LastOrderClock, MenuCatalog};
pub use session::{SeatStorage, SessionManager};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    __  ____     __           _
   /  |/  (_)___/ /___  _____(_)
  / /|_/ / / __  / __ \/ ___/ /
 / /  / / / /_/ / /_/ / /  / /
/_/  /_/_/\__,_/\____/_/  /_/
        卓上注文ターミナル
    "#
    );
}
