//! Catch game data structures (Fruit Catcher and Coin Catcher).

use crate::core::constants::{
    APPLE_SIZE, BASKET_HEIGHT, BASKET_WIDTH, COIN_SIZE, TARGET_SPAWN_MARGIN, WORLD_HEIGHT,
    WORLD_WIDTH,
};
use crate::core::geometry::{basket_body, Rect};
use crate::core::{Countdown, Emitter, RoundSettings, ScenePhase, SoundCue};
use rand::Rng;

/// Which catch game is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchVariant {
    /// One apple, recycled to the top on every catch or miss.
    Fruit,
    /// Coins spawn on a timer and several can be falling at once.
    Coin,
}

impl CatchVariant {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fruit => "Fruit Catcher",
            Self::Coin => "Coin Catcher",
        }
    }

    /// Side length of this variant's (square) target sprite.
    pub fn target_size(&self) -> f64 {
        match self {
            Self::Fruit => APPLE_SIZE,
            Self::Coin => COIN_SIZE,
        }
    }
}

/// A falling target. Position is the sprite's top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub x: f64,
    pub y: f64,
    /// Downward velocity in px/s.
    pub vy: f64,
    pub size: f64,
}

impl Target {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.size, self.size)
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct CatchGame {
    pub variant: CatchVariant,
    pub phase: ScenePhase,
    pub settings: RoundSettings,
    pub forfeit_pending: bool,
    pub forfeited: bool,

    // Player (basket). y is fixed near the bottom edge.
    pub player_x: f64,
    pub player_y: f64,
    /// Horizontal velocity in px/s.
    pub player_vx: f64,

    pub targets: Vec<Target>,
    /// Milliseconds until the next coin spawns (Coin variant only).
    pub spawn_timer_ms: u64,

    pub score: u32,
    pub countdown: Countdown,
    pub emitter: Emitter,

    /// Sub-tick time accumulator (milliseconds).
    pub accumulated_time_ms: u64,

    /// Sound cues raised since the frontend last drained them.
    pub pending_cues: Vec<SoundCue>,
}

impl CatchGame {
    /// Create the scene. It starts paused, waiting for the start button.
    pub fn new(variant: CatchVariant, settings: RoundSettings) -> Self {
        let targets = match variant {
            CatchVariant::Fruit => vec![Target {
                x: 0.0,
                y: 0.0,
                vy: 0.0,
                size: APPLE_SIZE,
            }],
            CatchVariant::Coin => Vec::new(),
        };

        let mut game = Self {
            variant,
            phase: ScenePhase::WaitingToStart,
            settings,
            forfeit_pending: false,
            forfeited: false,

            player_x: 0.0,
            player_y: Self::floor_y(),
            player_vx: 0.0,

            targets,
            spawn_timer_ms: 0,

            score: 0,
            countdown: Countdown::new(settings.round_ms),
            emitter: Emitter::new(),

            accumulated_time_ms: 0,

            pending_cues: vec![SoundCue::BackgroundMusic],
        };
        game.sync_emitter();
        game
    }

    /// Sprite bounds of the basket.
    pub fn player_bounds(&self) -> Rect {
        Rect::new(self.player_x, self.player_y, BASKET_WIDTH, BASKET_HEIGHT)
    }

    /// The basket's catching strip.
    pub fn player_hitbox(&self) -> Rect {
        basket_body().at(self.player_x, self.player_y)
    }

    /// Basket y that rests its body on the world floor. The sprite overhangs
    /// below the body, so this is higher than `WORLD_HEIGHT - BASKET_HEIGHT`.
    pub fn floor_y() -> f64 {
        let body = basket_body();
        WORLD_HEIGHT - (body.offset_y + body.height)
    }

    /// Keep the emitter glued to the basket centre.
    pub fn sync_emitter(&mut self) {
        let (cx, cy) = self.player_bounds().center();
        self.emitter.follow(cx, cy);
    }

    /// Random spawn column for a new or recycled target.
    pub fn random_x<R: Rng>(rng: &mut R) -> f64 {
        rng.gen_range(0.0..WORLD_WIDTH - TARGET_SPAWN_MARGIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fruit_game_defaults() {
        let game = CatchGame::new(CatchVariant::Fruit, RoundSettings::default());
        assert_eq!(game.phase, ScenePhase::WaitingToStart);
        assert_eq!(game.score, 0);
        assert_eq!(game.targets.len(), 1);
        assert_eq!(game.targets[0].x, 0.0);
        assert_eq!(game.targets[0].y, 0.0);
        assert_eq!(game.player_x, 0.0);
        assert!((game.player_y - 393.333).abs() < 1e-3);
        assert_eq!(game.countdown.display_seconds(), 30);
        assert_eq!(game.pending_cues, vec![SoundCue::BackgroundMusic]);
    }

    #[test]
    fn test_new_coin_game_starts_empty() {
        let game = CatchGame::new(CatchVariant::Coin, RoundSettings::default());
        assert!(game.targets.is_empty());
    }

    #[test]
    fn test_random_x_in_spawn_range() {
        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let x = CatchGame::random_x(&mut rng);
            assert!((0.0..400.0).contains(&x));
        }
    }

    #[test]
    fn test_emitter_follows_basket_centre() {
        let game = CatchGame::new(CatchVariant::Fruit, RoundSettings::default());
        assert_eq!(game.emitter.follow_x, 50.0);
        assert_eq!(game.emitter.follow_y, 450.0);
    }

    #[test]
    fn test_basket_body_stays_inside_world() {
        let game = CatchGame::new(CatchVariant::Fruit, RoundSettings::default());
        let hitbox = game.player_hitbox();
        // Resting on the floor, within float rounding
        assert!((hitbox.bottom() - WORLD_HEIGHT).abs() < 1e-9);
        assert!(game.player_bounds().bottom() > WORLD_HEIGHT);
    }
}
