//! Arcade - Terminal Arcade Games Library
//!
//! This module exposes the game logic for testing and external use.

pub mod build_info;
pub mod config;
pub mod core;
pub mod games;
pub mod utils;

pub use config::Config;
pub use core::constants::*;
pub use core::{EndReason, RoundResults, RoundSettings, ScenePhase, SoundCue};
pub use games::{ActiveGame, GameKind, GameMenu};
