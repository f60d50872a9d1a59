//! 时间工具函数 — HH:MM:SS 解析
//!
//! 营业时间与排班时间统一在 service 层解析成 [`NaiveTime`] 再比较，
//! repository 层只接收原始字符串。

use chrono::NaiveTime;

/// 解析时刻字符串 (HH:MM:SS)
pub fn parse_hms(value: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
}
