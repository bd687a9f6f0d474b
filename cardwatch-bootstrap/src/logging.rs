use std::path::Path;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "compact" | "text" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            other => Err(anyhow!("unknown log format '{}', expected compact or json", other)),
        }
    }
}

/// Filter from `RUST_LOG`, falling back to `info` with the HTTP stack quieted.
pub fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hyper=info,tower_http=info"))
}

/// Installs the global subscriber. With `log_dir` set, events also go to a
/// daily rolling file; keep the returned guard alive until exit so it flushes.
pub fn setup_logging(format: LogFormat, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let (file_writer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "cardwatch.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };
    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .json()
            .with_writer(writer)
            .with_ansi(false)
            .with_current_span(false)
    });

    let registry = tracing_subscriber::registry()
        .with(default_filter())
        .with(file_layer);
    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(false).with_current_span(false))
            .init(),
        LogFormat::Compact => registry
            .with(fmt::layer().with_target(true).compact())
            .init(),
    }

    let format_name = match format {
        LogFormat::Json => "json",
        LogFormat::Compact => "compact",
    };
    let log_dir = log_dir
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| "<none>".to_string());
    tracing::info!(format = format_name, log_dir = %log_dir, "logging initialized");
    guard
}
