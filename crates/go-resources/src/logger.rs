//! File-based logging using simplelog
//!
//! The terminal belongs to the menu, so logs go to a file:
//! - Debug builds: current working directory (for development convenience)
//! - Release builds: cache directory (~/.cache/go-resources/ on Linux)
//!
//! Logging is opt-in. The level comes from `RUST_LOG`, else from the
//! `log_level` config entry; with neither set no log file is created.

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

/// Get the log file path based on build type
fn log_file_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let filename = format!("go-resources-{}.log", timestamp);

    if cfg!(debug_assertions) {
        PathBuf::from(filename)
    } else {
        go_resources_config::cache_dir()
            .map(|dir| dir.join(&filename))
            .unwrap_or_else(|_| PathBuf::from(filename))
    }
}

/// Parse a level name as used by `RUST_LOG` and the config file
fn parse_level(value: &str) -> LevelFilter {
    match value.trim().to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Resolve the effective level: `RUST_LOG` wins over the config value
fn resolve_level(env_level: Option<&str>, config_level: Option<&str>) -> LevelFilter {
    env_level
        .or(config_level)
        .map(parse_level)
        .unwrap_or(LevelFilter::Off)
}

/// Initialize file-based logging
///
/// Returns the path of the log file, or `None` when logging is off.
pub fn init(config_level: Option<&str>) -> Result<Option<PathBuf>> {
    let env_level = std::env::var("RUST_LOG").ok();
    let level = resolve_level(env_level.as_deref(), config_level);
    if level == LevelFilter::Off {
        return Ok(None);
    }

    let log_file = log_file_path();

    // Configure simplelog with timestamps
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build();

    let file = File::create(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    WriteLogger::init(level, config, file).context("Failed to initialize logger")?;

    Ok(Some(log_file))
}
