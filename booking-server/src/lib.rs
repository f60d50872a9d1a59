//! Booking Server - 多门店预约/排班后端
//!
//! # 架构概述
//!
//! - **认证** (`auth`): JWT + Argon2 认证体系
//! - **数据库** (`db`): SQLite 连接池 + repository 层
//! - **服务** (`services`): 排班校验、资料维护、头像存储
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! booking-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证
//! ├── services/      # 排班、资料、头像
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层
//! └── utils/         # 错误、时间、日志
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentStaff, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv + 日志)
///
/// 生产环境写入 work_dir/logs 下的滚动日志文件，开发环境只输出控制台。
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    if config.is_production() {
        config.ensure_work_dir_structure()?;
        let logs_dir = config.logs_dir();
        init_logger_with_file(&level, true, logs_dir.to_str())?;
    } else {
        init_logger(&level, false)?;
    }

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____              __   _
   / __ )____  ____  / /__(_)___  ____ _
  / __  / __ \/ __ \/ //_/ / __ \/ __ `/
 / /_/ / /_/ / /_/ / ,< / / / / / /_/ /
/_____/\____/\____/_/|_/_/_/ /_/\__, /
                               /____/
    "#
    );
}
