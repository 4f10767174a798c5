//! Catch minigames.
//!
//! The player slides a basket along the bottom edge to catch falling
//! targets before the round timer runs out. Fruit Catcher drops a single
//! apple that is recycled after every catch or miss; Coin Catcher spawns
//! coins on a timer so several can be in the air at once.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
