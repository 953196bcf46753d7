//! Tracing bootstrap for shadescope binaries.
//!
//! Logs go to a daily-rolling file named after the component, optionally
//! mirrored to stderr. The directory comes from [`LogOptions`], which falls
//! back to `$SHADESCOPE_LOG_DIR` and then `~/.shadescope/logs`.

use crate::error::{Result, ShadescopeError};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Overrides the default log directory
pub const LOG_DIR_VAR: &str = "SHADESCOPE_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    /// File name prefix of the rolled logs (e.g. `cli.2024-01-21`)
    pub component: String,
    pub directory: PathBuf,
    pub to_stderr: bool,
    /// Filter used when `RUST_LOG` is unset
    pub default_filter: String,
}

impl LogOptions {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            directory: log_dir(),
            to_stderr: false,
            default_filter: "info".to_string(),
        }
    }

    pub fn with_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    pub fn with_stderr(mut self, to_stderr: bool) -> Self {
        self.to_stderr = to_stderr;
        self
    }

    pub fn with_default_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = filter.into();
        self
    }
}

/// Directory holding rolled log files for this process
pub fn log_dir() -> PathBuf {
    resolve_log_dir(std::env::var_os(LOG_DIR_VAR), dirs::home_dir())
}

fn resolve_log_dir(overridden: Option<OsString>, home: Option<PathBuf>) -> PathBuf {
    match overridden.filter(|dir| !dir.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => home
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".shadescope")
            .join("logs"),
    }
}

/// Install the global subscriber. Keep the returned guard alive until exit
/// or buffered lines are lost.
pub fn init_logging(options: &LogOptions) -> Result<WorkerGuard> {
    std::fs::create_dir_all(&options.directory)?;

    let file_appender = tracing_appender::rolling::daily(&options.directory, &options.component);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&options.default_filter))
        .map_err(|e| ShadescopeError::Config(format!("invalid log filter: {e}")))?;

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    // Optional layers are no-ops when None
    let stderr_layer = options.to_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| ShadescopeError::Config(format!("logging already initialized: {e}")))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_override_wins() {
        let dir = resolve_log_dir(
            Some(OsString::from("/var/log/shadescope")),
            Some(PathBuf::from("/home/artist")),
        );
        assert_eq!(dir, PathBuf::from("/var/log/shadescope"));
    }

    #[test]
    fn test_log_dir_falls_back_to_home() {
        let home = Some(PathBuf::from("/home/artist"));
        assert_eq!(
            resolve_log_dir(None, home.clone()),
            PathBuf::from("/home/artist/.shadescope/logs")
        );
        assert_eq!(
            resolve_log_dir(Some(OsString::new()), home),
            PathBuf::from("/home/artist/.shadescope/logs")
        );
        assert_eq!(
            resolve_log_dir(None, None),
            PathBuf::from("./.shadescope/logs")
        );
    }

    #[test]
    fn test_options_builders() {
        let options = LogOptions::new("cli")
            .with_directory("/tmp/logs")
            .with_stderr(true)
            .with_default_filter("shadescope_core=debug");

        assert_eq!(options.component, "cli");
        assert_eq!(options.directory, PathBuf::from("/tmp/logs"));
        assert!(options.to_stderr);
        assert_eq!(options.default_filter, "shadescope_core=debug");
    }
}
