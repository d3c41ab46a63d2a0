//! Global context for CLI commands

use anyhow::{Context as _, Result};
use minuta_core::config::Config;
use std::env;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber
///
/// `--verbose` forces debug output for the workspace crates; otherwise
/// `RUST_LOG` applies, defaulting to warnings only.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("minuta=debug,minuta_core=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load the configuration for this invocation
///
/// An explicit `--config` must exist; otherwise `minuta.toml` in the current
/// directory is used when present.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            Config::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))
        }
        None => {
            let current_dir = env::current_dir()?;
            tracing::debug!(dir = %current_dir.display(), "looking for minuta.toml");
            Ok(Config::load_or_default(&current_dir)?)
        }
    }
}
