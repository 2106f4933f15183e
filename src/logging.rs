//! Log setup for the terminal binaries.
//!
//! The screen belongs to the game while it runs, so records go to a file or
//! nowhere.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

/// Send `log` records to `path` (appending), filtered by `RUST_LOG`.
///
/// Without a path logging stays off.
pub fn init(path: Option<&str>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {path}"))?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("install logger")?;

    log::info!("logging to {path}");
    Ok(())
}
