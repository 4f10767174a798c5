//! Engine-like building blocks shared by all scenes.

pub mod constants;
pub mod countdown;
pub mod geometry;
pub mod particles;
pub mod scene;

pub use countdown::Countdown;
pub use geometry::{Body, Rect};
pub use particles::{Emitter, Particle};
pub use scene::{EndReason, RoundResults, RoundSettings, ScenePhase, SoundCue};
