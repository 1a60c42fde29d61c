//! Debug logging
//!
//! The terminal belongs to the UI, so log records go to a file in the
//! temp dir. Logging is off unless `--debug` is passed or `RUST_LOG` is set.

use std::fs::OpenOptions;

use anyhow::{Context, Result};
use log::LevelFilter;

use crate::utils;

pub fn init(debug: bool) -> Result<()> {
    let env_filter = std::env::var("RUST_LOG").ok();
    if !debug && env_filter.is_none() {
        log::set_max_level(LevelFilter::Off);
        return Ok(());
    }

    let path = utils::get_debug_log_path();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open debug log {}", path.display()))?;

    let mut builder = env_logger::Builder::new();
    builder
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .filter_level(if debug { LevelFilter::Debug } else { LevelFilter::Warn });

    if let Some(filter) = env_filter {
        builder.parse_filters(&filter);
    }

    builder.try_init().context("Failed to initialize logger")?;
    log::debug!("Debug logging to {}", path.display());
    Ok(())
}
