use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context as _, Result};
use tracing_subscriber::EnvFilter;

/// Where log lines may go when no log file is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Warnings and errors on stderr, for line-oriented output.
    Stderr,
    /// Nothing, for modes that own the whole screen.
    Silent,
}

fn filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Installs the global subscriber. `RUST_LOG` overrides the default level.
pub fn init(log_file: Option<&Path>, fallback: Fallback) -> Result<()> {
    match (log_file, fallback) {
        (Some(path), _) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file '{}'", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter("info"))
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|err| anyhow!(err))?;
        }
        (None, Fallback::Stderr) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter("warn"))
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|err| anyhow!(err))?;
        }
        (None, Fallback::Silent) => {}
    }
    Ok(())
}
