//! Logging setup for MailAssist.
//!
//! `RUST_LOG` takes precedence over `logging.level` when it is set and
//! parses; otherwise the configured level applies to every target.

use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;

use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::Result;

/// Parse log level string to tracing Level.
fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Filter from `RUST_LOG`-style directives, falling back to the configured level.
fn build_filter(level: &str, env_directives: Option<&str>) -> EnvFilter {
    env_directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::default().add_directive(parse_level(level).into()))
}

fn filter_from_env(level: &str) -> EnvFilter {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    build_filter(level, directives.as_deref())
}

/// Create the log file, and its parent directory when missing.
fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(File::create(path)?)
}

/// Initialize logging from the `[logging]` section.
///
/// Output always goes to stdout. When `logging.file` is set it is mirrored
/// to that file without ANSI colours.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let Some(path) = config.file.as_deref() else {
        init_console_only(&config.level);
        return Ok(());
    };

    let log_file = Arc::new(open_log_file(Path::new(path))?);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout.and(log_file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter_from_env(&config.level))
        .init();

    Ok(())
}

/// Initialize console-only logging.
pub fn init_console_only(level: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .with(filter_from_env(level))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("trace"), Level::TRACE);
        assert_eq!(parse_level("DEBUG"), Level::DEBUG);
        assert_eq!(parse_level("warning"), Level::WARN);
        assert_eq!(parse_level("ERROR"), Level::ERROR);
        assert_eq!(parse_level("invalid"), Level::INFO);
        assert_eq!(parse_level(""), Level::INFO);
    }

    #[test]
    fn test_env_directives_override_configured_level() {
        assert_eq!(build_filter("info", Some("debug")).to_string(), "debug");
        assert_eq!(
            build_filter("warn", Some("mailassist=trace")).to_string(),
            "mailassist=trace"
        );
    }

    #[test]
    fn test_configured_level_without_env() {
        assert_eq!(build_filter("debug", None).to_string(), "debug");
        assert_eq!(build_filter("warn", Some("  ")).to_string(), "warn");
    }

    #[test]
    fn test_unparsable_env_falls_back() {
        assert_eq!(build_filter("error", Some("mailassist=bogus")).to_string(), "error");
    }

    #[test]
    fn test_open_log_file_creates_parent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("logs").join("mailassist.log");

        open_log_file(&path).unwrap();

        assert!(path.exists());
    }
}
