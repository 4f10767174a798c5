//! Scene lifecycle shared by every game: phase, sound cues, round results.

use super::constants::{PLAYER_SPEED, ROUND_DURATION_MS, WIN_THRESHOLD};
use super::countdown::Countdown;

/// Lifecycle of a single round. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenePhase {
    /// Created but paused until the player presses start.
    WaitingToStart,
    Running,
    Over,
}

/// Sound requests raised by a scene. The frontend decides how to play them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    BackgroundMusic,
    Catch,
    Flap,
    Crash,
    TimeUp,
}

/// Why a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    TimeUp,
    Crashed,
    Forfeit,
}

/// Per-round tuning resolved from the user's config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundSettings {
    pub round_ms: u64,
    pub win_threshold: u32,
    pub player_speed: f64,
}

impl Default for RoundSettings {
    fn default() -> Self {
        Self {
            round_ms: ROUND_DURATION_MS,
            win_threshold: WIN_THRESHOLD,
            player_speed: PLAYER_SPEED,
        }
    }
}

pub const WIN_MESSAGE: &str = "You did the thing!";
pub const LOSE_MESSAGE: &str = "Better luck next time!";

/// Content of the results overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResults {
    pub game_name: &'static str,
    pub score: u32,
    pub threshold: u32,
    pub reason: EndReason,
}

impl RoundResults {
    pub fn won(&self) -> bool {
        self.score >= self.threshold
    }

    pub fn message(&self) -> &'static str {
        if self.won() {
            WIN_MESSAGE
        } else {
            LOSE_MESSAGE
        }
    }

    pub fn reason_text(&self) -> &'static str {
        match self.reason {
            EndReason::TimeUp => "Time's up!",
            EndReason::Crashed => "Crashed!",
            EndReason::Forfeit => "Round abandoned.",
        }
    }
}

pub fn score_text(score: u32) -> String {
    format!("Score: {}", score)
}

pub fn time_text(countdown: &Countdown) -> String {
    format!("Remaining Time: {}", countdown.display_seconds())
}
