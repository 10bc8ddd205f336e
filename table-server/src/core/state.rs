use std::sync::Arc;

use crate::core::Config;
use crate::services::{DummyCatalog, LastOrderClock, MenuCatalog};
use crate::session::{SeatStorage, SessionManager};

/// 服务器状态 - 持有所有服务的单例引用
///
/// ServerState 是终端服务的核心数据结构，持有所有服务的共享引用。
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | sessions | SessionManager | 座位会话引擎 (cart/ledger/call) |
/// | catalog | Arc<dyn MenuCatalog> | 菜单目录协作方 |
/// | clock | LastOrderClock | LO 倒计时时钟 |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 座位会话引擎
    pub sessions: SessionManager,
    /// 菜单目录 (只读协作方)
    pub catalog: Arc<dyn MenuCatalog>,
    /// LO 倒计时时钟
    pub clock: LastOrderClock,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (work_dir/database)
    /// 2. 会话存储 (redb)
    /// 3. 菜单目录 (目前为 DummyCatalog，真实目录 API 接入后替换)
    pub fn initialize(config: &Config) -> anyhow::Result<Self> {
        let db_path = config.db_path();
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let storage = SeatStorage::open(&db_path)?;
        tracing::info!(path = %db_path.display(), "Session storage opened");

        let catalog: Arc<dyn MenuCatalog> = Arc::new(DummyCatalog::default());
        let sessions = SessionManager::new(storage, catalog.clone());
        let clock = config.last_order_clock();

        Ok(Self {
            config: config.clone(),
            sessions,
            catalog,
            clock,
        })
    }
}
