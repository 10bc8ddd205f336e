use crate::services::LastOrderClock;
use chrono_tz::Tz;
use std::path::PathBuf;

/// 服务器配置 - 桌边点餐终端的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | /var/lib/midori/table | 工作目录 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | STORE_NAME | みどり亭 本店 | 店铺名称 |
/// | STORE_CLOSE_HOUR | 24 | 闭店小时 (0-24, 24 = 次日零点) |
/// | STORE_CLOSE_MINUTE | 0 | 闭店分钟 |
/// | LO_OFFSET_MINUTES | 30 | LO 提前分钟数 |
/// | CALL_COOLDOWN_MS | 30000 | 呼叫冷却时间(毫秒) |
/// | STORE_TIMEZONE | Asia/Tokyo | 业务时区 |
/// | ENVIRONMENT | development | 运行环境 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/midori HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库、日志等文件
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 店铺名称
    pub store_name: String,
    /// 闭店小时 (0-24, 24 表示次日零点)
    pub close_hour: u32,
    /// 闭店分钟
    pub close_minute: u32,
    /// ラストオーダー提前分钟数
    pub lo_offset_minutes: i64,
    /// 呼叫服务员冷却时间 (毫秒)
    pub call_cooldown_ms: i64,
    /// 业务时区
    pub timezone: Tz,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR")
                .unwrap_or_else(|_| "/var/lib/midori/table".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            store_name: std::env::var("STORE_NAME").unwrap_or_else(|_| "みどり亭 本店".into()),
            close_hour: std::env::var("STORE_CLOSE_HOUR")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|h| *h <= 24)
                .unwrap_or(24),
            close_minute: std::env::var("STORE_CLOSE_MINUTE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|m| *m < 60)
                .unwrap_or(0),
            lo_offset_minutes: std::env::var("LO_OFFSET_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            call_cooldown_ms: std::env::var("CALL_COOLDOWN_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30_000),
            timezone: std::env::var("STORE_TIMEZONE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(chrono_tz::Asia::Tokyo),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 数据库文件路径 (work_dir/database/sessions.redb)
    pub fn db_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir)
            .join("database")
            .join("sessions.redb")
    }

    /// 构建 LO 倒计时时钟
    pub fn last_order_clock(&self) -> LastOrderClock {
        LastOrderClock::new(
            self.close_hour,
            self.close_minute,
            self.lo_offset_minutes,
            self.timezone,
        )
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
