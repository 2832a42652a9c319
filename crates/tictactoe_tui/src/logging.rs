//! Tracing setup.
//!
//! Both front ends own the terminal, so log output always goes to a file.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Installs a global subscriber appending to `path`.
///
/// `RUST_LOG` takes precedence over `default_filter`. Calling this more than
/// once keeps the first subscriber and leaves its log intact.
pub fn init_file_tracing(path: &Path, default_filter: &str) -> Result<()> {
    // Append: a second call must not truncate the file the first subscriber
    // is still writing to.
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    if tracing::dispatcher::has_been_set() {
        tracing::debug!(path = %path.display(), "Tracing already initialized");
        return Ok(());
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    tracing::info!(path = %path.display(), "Tracing initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_keeps_existing_log() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.log");
        init_file_tracing(&path, "debug").unwrap();
        tracing::warn!("written before second init");

        init_file_tracing(&path, "info").unwrap();
        tracing::warn!("written after second init");

        let log = std::fs::read_to_string(&path).unwrap();
        assert!(!log.contains('\0'));
        assert!(log.contains("written before second init"));
        assert!(log.contains("written after second init"));
    }

    #[test]
    fn test_unwritable_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("game.log");
        assert!(init_file_tracing(&path, "info").is_err());
    }
}
