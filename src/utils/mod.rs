//! Utility modules: persistence helpers, file logging.

pub mod logging;
pub mod persistence;
