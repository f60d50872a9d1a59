//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments
//! Features:
//! - Daily rotating application logs (deleted after 14 days)
//! - Permanent audit logs (never deleted)
//! - Permanent security logs (never deleted)

use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, prelude::*};

/// Clean up old application log files (older than 14 days)
///
/// Call this periodically (e.g., daily) to maintain log size
pub fn cleanup_old_logs(log_dir: &Path) -> anyhow::Result<()> {
    use chrono::{Local, TimeZone};

    let cutoff = Local::now() - chrono::Duration::days(14);

    // Application logs subdirectory; audit/security logs are never deleted
    let app_log_dir = log_dir.join("app");
    if app_log_dir.exists() {
        for entry in fs::read_dir(app_log_dir)? {
            let entry = entry?;
            let path = entry.path();

            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                // Match app.YYYY-MM-DD pattern emitted by the daily appender
                if let Some(date_part) = name.strip_prefix("app.")
                    && let Ok(naive_date) = chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
                {
                    if let Some(local_datetime) = Local
                        .from_local_datetime(&naive_date.and_hms_opt(0, 0, 0).unwrap())
                        .single()
                        && local_datetime < cutoff
                    {
                        fs::remove_file(&path)?;
                        tracing::info!(file = %name, "Deleted old log file");
                    }
                }
            }
        }
    }

    Ok(())
}

fn file_layer<S>(
    dir: PathBuf,
    prefix: &str,
    filter: fn(&tracing::Metadata<'_>) -> bool,
) -> anyhow::Result<Box<dyn Layer<S> + Send + Sync>>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a> + Send + Sync,
{
    fs::create_dir_all(&dir)?;
    let appender = RollingFileAppender::new(Rotation::DAILY, dir, prefix);
    Ok(fmt::layer()
        .json()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::sync::Mutex::new(appender))
        .with_filter(tracing_subscriber::filter::filter_fn(filter))
        .boxed())
}

/// Initialize the logging system with daily rotating logs
///
/// # Arguments
/// * `level` - Log level (e.g., "info", "debug", "warn")
/// * `json_format` - Whether to use JSON console format (true for production)
/// * `log_dir` - Optional directory for file logging; file logs are always JSON
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer: Box<dyn Layer<_> + Send + Sync> = if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(EnvFilter::new(level))
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(EnvFilter::new(level))
            .boxed()
    };

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    if let Some(dir) = log_dir {
        let log_dir = Path::new(dir);
        fs::create_dir_all(log_dir)?;

        // Standard application logs (rotated daily, subject to 14-day cleanup)
        let app_layer = file_layer(log_dir.join("app"), "app", |meta| {
            meta.target() != "audit" && meta.target() != "security"
        })?;
        // Permanent audit logs (never deleted)
        let audit_layer = file_layer(log_dir.join("audit"), "audit", |meta| {
            meta.target() == "audit"
        })?;
        // Permanent security logs (never deleted)
        let security_layer = file_layer(log_dir.join("security"), "security", |meta| {
            meta.target() == "security"
        })?;

        tokio::spawn(periodic_cleanup(log_dir.to_path_buf()));

        subscriber
            .with(app_layer)
            .with(audit_layer)
            .with(security_layer)
            .init();
    } else {
        subscriber.init();
    }

    Ok(())
}

/// Periodic cleanup task - runs every hour to clean old logs
async fn periodic_cleanup(log_dir: PathBuf) {
    use tokio::time::{Duration, sleep};

    loop {
        sleep(Duration::from_secs(3600)).await;

        if let Err(e) = cleanup_old_logs(&log_dir) {
            tracing::error!(error = %e, "Failed to cleanup old logs");
        }
    }
}

/// Initialize the logging system (console only)
///
/// Convenience function for console-only logging
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    init_logger_with_file(level, json_format, None)
}

/// Audit log helper - records critical business operations
///
/// Audit logs are permanently stored in `audit.YYYY-MM-DD` files and are
/// NEVER deleted by the cleanup task.
///
/// # Examples
/// ```no_run
/// # use booking_server::audit_log;
/// // Login event
/// audit_log!("staff:123", "login", "staff:123");
///
/// // Schedule submission
/// audit_log!("staff:123", "submit_schedule", "schedule:456", "3 entries");
/// ```
#[macro_export]
macro_rules! audit_log {
    ($user_id:expr, $action:expr, $resource:expr) => {
        tracing::info!(
            target: "audit",
            user_id = $user_id,
            action = $action,
            resource = $resource,
            "AUDIT"
        );
    };
    ($user_id:expr, $action:expr, $resource:expr, $details:expr) => {
        tracing::info!(
            target: "audit",
            user_id = $user_id,
            action = $action,
            resource = $resource,
            details = $details,
            "AUDIT"
        );
    };
}

/// Security log helper - records security-related events
///
/// # Examples
/// ```no_run
/// # use booking_server::security_log;
/// security_log!("WARN", "auth_failed", email = "a@b.c", reason = "invalid_password");
/// ```
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),* $(,)?) => {
        tracing::warn!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}
