//! File logger setup.
//!
//! The terminal belongs to the UI while a game is running, so log records go
//! to ~/.arcade/arcade.log instead of stderr. `ARCADE_LOG` sets the filter
//! (same syntax as `RUST_LOG`, default `info`).

use super::persistence::data_path;
use crate::core::constants::LOG_FILENAME;
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

pub const LOG_ENV_VAR: &str = "ARCADE_LOG";

/// Install the global logger. Returns the log file path.
pub fn init() -> io::Result<PathBuf> {
    let path = data_path(LOG_FILENAME)?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    Builder::from_env(Env::default().filter_or(LOG_ENV_VAR, "info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))?;

    Ok(path)
}
