//! 服务层 - 服务器核心服务
//!
//! # 服务列表
//!
//! - [`SchedulingService`] - 排班校验与提交
//! - [`StaffService`] - 员工资料维护
//! - [`ImageStorage`] - 头像文件存储

pub mod image_storage;
pub mod scheduling;
pub mod staff;

pub use image_storage::ImageStorage;
pub use scheduling::{SchedulingError, SchedulingService};
pub use staff::StaffService;
