use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Env, Target};

/// The terminal belongs to the UI, so log records go to this file instead of stderr.
pub const LOG_FILE: &str = "titanic-tui.log";

/// Initializes `env_logger`, filtering with `RUST_LOG` and defaulting to `info`.
///
/// # Errors
/// Returns an error if the log file can't be opened.
pub fn init() -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(LOG_FILE)
        .with_context(|| format!("failed to open {LOG_FILE}"))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}
