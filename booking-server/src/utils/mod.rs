//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] / [`AppResponse`] - 应用错误类型和响应结构
//! - [`time`] - HH:MM:SS 解析
//! - [`logger`] - 日志初始化

pub mod error;
pub mod logger;
pub mod time;

pub use error::{AppError, AppResponse};
pub use error::{created, ok, ok_with_message};

/// Result type for handlers and services
pub type AppResult<T> = Result<T, AppError>;
