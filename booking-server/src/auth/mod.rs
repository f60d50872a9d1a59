//! 认证模块 - JWT 认证体系
//!
//! - [`JwtService`] - 令牌签发与验证
//! - [`require_auth`] - 认证中间件
//! - [`CurrentStaff`] - 已认证员工上下文 (提取器)

pub mod extractor;
pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, CurrentStaff, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;
