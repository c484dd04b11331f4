//! Tracing subscriber setup.
//!
//! CLI commands log to stderr. The dashboard owns the terminal, so it logs to
//! `multidesk.log` in the data directory instead.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::error::Result;

pub const LOG_ENV: &str = "MULTIDESK_LOG";
pub const LOG_FILE: &str = "multidesk.log";

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "multidesk=debug,warn"
        } else {
            "warn"
        })
    })
}

/// Log file path inside `dir`
pub fn log_file_in(dir: &Path) -> PathBuf {
    dir.join(LOG_FILE)
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(target: &LogTarget, verbose: bool) -> Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter(verbose));

    let installed = match target {
        LogTarget::Stderr => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            registry
                .with(
                    fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .try_init()
        }
    };

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_in_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(log_file_in(dir.path()), dir.path().join("multidesk.log"));
    }

    #[test]
    fn test_init_file_target_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = log_file_in(&dir.path().join("logs"));
        init(&LogTarget::File(path.clone()), false).unwrap();
        assert!(path.exists());
    }
}
