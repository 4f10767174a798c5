//! Flappy Dodger minigame.
//!
//! A real-time action game where the player keeps a bird aloft by flapping
//! and threads it through scrolling pipe gaps. Each pipe passed scores a
//! point; touching a pipe or the floor ends the round early.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
