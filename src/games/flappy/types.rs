//! Flappy Dodger data structures.

use crate::core::constants::{
    BIRD_HEIGHT, BIRD_WIDTH, BIRD_X, PIPE_GAP, PIPE_GAP_MARGIN, PIPE_WIDTH, WORLD_HEIGHT,
    WORLD_WIDTH,
};
use crate::core::{Countdown, EndReason, Rect, RoundSettings, ScenePhase, SoundCue};
use rand::Rng;

/// A pipe pair: a top column and a bottom column separated by a gap.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    /// Left edge in world pixels (float for smooth scrolling).
    pub x: f64,
    /// Vertical centre of the gap.
    pub gap_center: f64,
    /// Whether the bird has passed this pipe (for scoring).
    pub passed: bool,
}

impl Pipe {
    pub fn right(&self) -> f64 {
        self.x + PIPE_WIDTH
    }

    pub fn gap_top(&self) -> f64 {
        self.gap_center - PIPE_GAP / 2.0
    }

    pub fn gap_bottom(&self) -> f64 {
        self.gap_center + PIPE_GAP / 2.0
    }

    /// The two solid columns of this pipe.
    pub fn columns(&self) -> [Rect; 2] {
        [
            Rect::new(self.x, 0.0, PIPE_WIDTH, self.gap_top()),
            Rect::new(
                self.x,
                self.gap_bottom(),
                PIPE_WIDTH,
                WORLD_HEIGHT - self.gap_bottom(),
            ),
        ]
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    pub phase: ScenePhase,
    pub settings: RoundSettings,
    pub end_reason: Option<EndReason>,
    pub forfeit_pending: bool,

    // Bird state. x is fixed at BIRD_X.
    /// Top edge of the bird sprite.
    pub bird_y: f64,
    /// Vertical velocity in px/s (positive = downward).
    pub bird_vy: f64,
    /// Flap input waiting to be consumed next physics tick.
    pub flap_queued: bool,

    pub pipes: Vec<Pipe>,
    /// Milliseconds until the next pipe spawns.
    pub spawn_timer_ms: u64,

    pub score: u32,
    pub countdown: Countdown,

    /// Sub-tick time accumulator (milliseconds).
    pub accumulated_time_ms: u64,

    /// Sound cues raised since the frontend last drained them.
    pub pending_cues: Vec<SoundCue>,
}

impl FlappyGame {
    pub const NAME: &'static str = "Flappy Dodger";

    /// Create the scene. It starts paused, waiting for the first flap.
    pub fn new(settings: RoundSettings) -> Self {
        Self {
            phase: ScenePhase::WaitingToStart,
            settings,
            end_reason: None,
            forfeit_pending: false,

            bird_y: (WORLD_HEIGHT - BIRD_HEIGHT) / 2.0,
            bird_vy: 0.0,
            flap_queued: false,

            pipes: Vec::new(),
            spawn_timer_ms: 0,

            score: 0,
            countdown: Countdown::new(settings.round_ms),

            accumulated_time_ms: 0,

            pending_cues: vec![SoundCue::BackgroundMusic],
        }
    }

    pub fn bird_bounds(&self) -> Rect {
        Rect::new(BIRD_X, self.bird_y, BIRD_WIDTH, BIRD_HEIGHT)
    }

    /// Spawn a pipe just off the right edge with a random gap position.
    pub fn spawn_pipe<R: Rng>(&mut self, rng: &mut R) {
        let min_center = PIPE_GAP / 2.0 + PIPE_GAP_MARGIN;
        let max_center = WORLD_HEIGHT - PIPE_GAP / 2.0 - PIPE_GAP_MARGIN;
        let gap_center = rng.gen_range(min_center..=max_center);

        self.pipes.push(Pipe {
            x: WORLD_WIDTH,
            gap_center,
            passed: false,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let game = FlappyGame::new(RoundSettings::default());
        assert_eq!(game.phase, ScenePhase::WaitingToStart);
        assert!(game.end_reason.is_none());
        assert_eq!(game.score, 0);
        assert!(game.pipes.is_empty());
        assert!(!game.flap_queued);
        assert_eq!(game.bird_y, 238.0);
    }

    #[test]
    fn test_spawn_pipe() {
        let mut game = FlappyGame::new(RoundSettings::default());
        let mut rng = rand::thread_rng();

        for _ in 0..50 {
            game.spawn_pipe(&mut rng);
        }

        for pipe in &game.pipes {
            assert_eq!(pipe.x, WORLD_WIDTH);
            assert!(!pipe.passed);
            assert!(pipe.gap_top() >= PIPE_GAP_MARGIN);
            assert!(pipe.gap_bottom() <= WORLD_HEIGHT - PIPE_GAP_MARGIN);
        }
    }

    #[test]
    fn test_pipe_columns_leave_gap() {
        let pipe = Pipe {
            x: 200.0,
            gap_center: 250.0,
            passed: false,
        };
        let [top, bottom] = pipe.columns();
        assert_eq!(top.bottom(), 175.0);
        assert_eq!(bottom.y, 325.0);
        assert_eq!(bottom.bottom(), WORLD_HEIGHT);
        assert_eq!(pipe.right(), 260.0);
    }
}
