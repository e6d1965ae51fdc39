use std::{
    fs,
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};

use anyhow::{Context, Result, anyhow};
use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{self, RollingFileAppender},
};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use crate::config::{LoggingConfig, LoggingRotation};

const LOG_FILE_PREFIX: &str = "ecsmeta.log";

pub struct LoggingGuard {
    _worker_guard: Option<WorkerGuard>,
    run_id: String,
}

impl LoggingGuard {
    pub fn run_id(&self) -> &str {
        &self.run_id
    }
}

/// Installs the global subscriber: stderr text output and, when
/// `logging.dir` is set, a rolling JSON log file. Stdout is left untouched.
pub fn init_tracing(logging_config: &LoggingConfig) -> Result<LoggingGuard> {
    if logging_config.filter.trim().is_empty() {
        return Err(anyhow!("logging.filter cannot be empty"));
    }

    let stderr_layer = if logging_config.stderr_enabled {
        Some(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(build_env_filter(&logging_config.filter)?),
        )
    } else {
        None
    };

    let mut worker_guard = None;
    let mut retention_warnings = Vec::new();
    let file_layer = match &logging_config.dir {
        Some(dir) => {
            let log_dir = resolve_log_dir(dir)?;
            fs::create_dir_all(&log_dir).with_context(|| {
                format!("failed to create logging directory {}", log_dir.display())
            })?;
            retention_warnings = purge_expired_logs(
                &log_dir,
                LOG_FILE_PREFIX,
                logging_config.retention_days,
                SystemTime::now(),
            );

            let appender = build_rolling_appender(&log_dir, &logging_config.rotation);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            worker_guard = Some(guard);
            Some(
                fmt::layer()
                    .json()
                    .with_timer(fmt::time::UtcTime::rfc_3339())
                    .with_target(true)
                    .with_current_span(true)
                    .with_ansi(false)
                    .with_writer(writer)
                    .with_filter(build_env_filter(&logging_config.filter)?),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(ErrorLayer::default())
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to initialize tracing subscriber")?;

    let run_id = Uuid::now_v7().to_string();
    tracing::info!(
        target: "logging",
        run_id = %run_id,
        filter = %logging_config.filter,
        dir = ?logging_config.dir,
        rotation = ?logging_config.rotation,
        retention_days = logging_config.retention_days,
        "logging_initialized"
    );
    for warning in retention_warnings {
        tracing::warn!(target: "logging", warning = %warning, "logging_retention_warning");
    }

    Ok(LoggingGuard {
        _worker_guard: worker_guard,
        run_id,
    })
}

fn build_env_filter(filter: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(filter)
        .with_context(|| format!("failed to parse logging.filter '{}'", filter))
}

fn build_rolling_appender(log_dir: &Path, rotation: &LoggingRotation) -> RollingFileAppender {
    match rotation {
        LoggingRotation::Daily => rolling::daily(log_dir, LOG_FILE_PREFIX),
        LoggingRotation::Hourly => rolling::hourly(log_dir, LOG_FILE_PREFIX),
    }
}

fn resolve_log_dir(dir: &Path) -> Result<PathBuf> {
    if dir.is_absolute() {
        return Ok(dir.to_path_buf());
    }

    Ok(std::env::current_dir()
        .context("failed to read current working directory for logging.dir resolution")?
        .join(dir))
}

/// Removes prefixed log files last modified before the retention window.
/// Failures are returned as warnings so they can be logged once tracing is up.
fn purge_expired_logs(
    log_dir: &Path,
    prefix: &str,
    retention_days: usize,
    now: SystemTime,
) -> Vec<String> {
    let retention = Duration::from_secs(retention_days.saturating_mul(24 * 60 * 60) as u64);
    let cutoff = now.checked_sub(retention).unwrap_or(SystemTime::UNIX_EPOCH);

    let entries = match fs::read_dir(log_dir) {
        Ok(entries) => entries,
        Err(err) => {
            return vec![format!(
                "failed to scan logging directory {}: {}",
                log_dir.display(),
                err
            )];
        }
    };

    entries
        .filter_map(|entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => return Some(format!("failed to read logging directory entry: {err}")),
            };
            if !entry.file_name().to_string_lossy().starts_with(prefix) {
                return None;
            }

            let path = entry.path();
            let modified = match entry.metadata().and_then(|metadata| {
                if metadata.is_file() {
                    metadata.modified().map(Some)
                } else {
                    Ok(None)
                }
            }) {
                Ok(Some(modified)) => modified,
                Ok(None) => return None,
                Err(err) => return Some(format!("failed to stat {}: {}", path.display(), err)),
            };

            if modified > cutoff {
                return None;
            }
            fs::remove_file(&path)
                .err()
                .map(|err| format!("failed to remove expired log file {}: {}", path.display(), err))
        })
        .collect()
}
