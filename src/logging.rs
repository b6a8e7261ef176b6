//! Tracing subscriber initialization
//!
//! Wires CLI flags (`-v`, `-q`) and environment variables (`IMGSEEK_LOG`,
//! `RUST_LOG`) into a single `tracing-subscriber` stack.
//!
//! # Priority (highest to lowest)
//!
//! 1. `IMGSEEK_LOG` env var (per-target directives, e.g. `imgseek=debug,warn`)
//! 2. `RUST_LOG` env var
//! 3. CLI flags (`-q` → error, `-v` → info, `-vv` → debug, `-vvv` → trace)
//! 4. Default level: `warn`
//!
//! One-shot commands log to stderr. The interactive browser owns the
//! terminal, so it logs to a file instead.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::{self, writer::BoxMakeWriter};
use tracing_subscriber::prelude::*;

/// Project-specific filter variable
pub const LOG_ENV: &str = "IMGSEEK_LOG";

/// Verbosity level derived from CLI flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// `-q`: only errors
    Quiet,
    /// Default: warnings and above
    #[default]
    Normal,
    /// `-v`
    Verbose,
    /// `-vv`
    Debug,
    /// `-vvv`
    Trace,
}

impl Verbosity {
    /// Map to a default `tracing::Level`
    #[must_use]
    pub const fn default_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error
    Stderr,
    /// Append to a file, creating parent directories
    File(PathBuf),
}

/// Default log file for the interactive browser
#[must_use]
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("imgseek").join("imgseek.log"))
}

/// Initialize the global tracing subscriber
///
/// Call once, early in `main()`.
///
/// # Errors
///
/// Returns an I/O error if the log file cannot be opened or a global
/// subscriber is already installed.
pub fn init_subscriber(verbosity: Verbosity, target: &LogTarget) -> io::Result<()> {
    let filter = build_env_filter(verbosity);

    let (writer, use_ansi) = match target {
        LogTarget::Stderr => (
            BoxMakeWriter::new(io::stderr),
            io::IsTerminal::is_terminal(&io::stderr()),
        ),
        LogTarget::File(path) => (BoxMakeWriter::new(Mutex::new(open_log_file(path)?)), false),
    };

    let fmt_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(use_ansi)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer.compact())
        .try_init()
        .map_err(|e| io::Error::other(e.to_string()))
}

fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Build an `EnvFilter` respecting the priority chain:
/// `IMGSEEK_LOG` > `RUST_LOG` > CLI verbosity default.
fn build_env_filter(verbosity: Verbosity) -> EnvFilter {
    // An unparseable value falls through rather than failing startup.
    if let Ok(directives) = std::env::var(LOG_ENV)
        && let Ok(filter) = EnvFilter::try_new(&directives)
    {
        return filter;
    }

    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    EnvFilter::new(verbosity.default_level().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_verbosity() {
        assert_eq!(Verbosity::default(), Verbosity::Normal);
    }

    #[test]
    fn test_default_level_mapping() {
        assert_eq!(Verbosity::Quiet.default_level(), Level::ERROR);
        assert_eq!(Verbosity::Normal.default_level(), Level::WARN);
        assert_eq!(Verbosity::Verbose.default_level(), Level::INFO);
        assert_eq!(Verbosity::Debug.default_level(), Level::DEBUG);
        assert_eq!(Verbosity::Trace.default_level(), Level::TRACE);
    }

    #[test]
    fn test_build_env_filter_produces_valid_filter() {
        let _filter = build_env_filter(Verbosity::Quiet);
        let _filter = build_env_filter(Verbosity::Normal);
        let _filter = build_env_filter(Verbosity::Trace);
    }

    #[test]
    fn test_open_log_file_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a").join("b").join("imgseek.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_default_log_path_shape() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("imgseek/imgseek.log"));
        }
    }

    // init_subscriber installs a process-global subscriber, so it is only
    // exercised by running the binary.
}
