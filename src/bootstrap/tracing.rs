//! Tracing configuration for Savr
//!
//! Installs the global `tracing-subscriber` registry: an env-filter, a stdout
//! layer and, when a log directory is configured, a non-blocking file layer.
//!
//! `RUST_LOG` overrides the configured level.

use std::{fs, io, path::Path, sync::OnceLock};

use savr_core::config::AppConfig;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "savr.log";

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives
///
/// `level` comes from config; when empty the base level is debug in
/// development and info in release builds.
fn build_filter_directives(is_dev: bool, level: &str) -> Vec<String> {
    let base = if !level.trim().is_empty() {
        level.trim().to_string()
    } else if is_dev {
        "debug".to_string()
    } else {
        "info".to_string()
    };
    let crate_level = if is_dev { "debug" } else { "info" };

    vec![
        base,
        format!("savr_app={crate_level}"),
        format!("savr_infra={crate_level}"),
    ]
}

/// Initialize the tracing subscriber
///
/// Call once from `main`, after the configuration is resolved and before any
/// other work. File logging failures fall back to stdout only.
///
/// # Errors
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber(config: &AppConfig) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development(), &config.log_level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let file_writer = if config.log_dir.as_os_str().is_empty() {
        None
    } else {
        match build_file_writer(&config.log_dir) {
            Ok(writer) => Some(writer),
            Err(err) => {
                eprintln!("Failed to initialize file logging, falling back to stdout: {err}");
                None
            }
        }
    };

    // "2025-01-15 10:30:45.123 INFO [file.rs:42] [target] message"
    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(BoxMakeWriter::new(io::stdout));

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(
                "%Y-%m-%d %H:%M:%S%.3f".to_string(),
            ))
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(log_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
