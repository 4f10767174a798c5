//! The arcade's scenes: Fruit Catcher, Flappy Dodger, Coin Catcher.

pub mod catch;
pub mod flappy;
pub mod menu;

pub use catch::{CatchGame, CatchInput, CatchVariant, Target};
pub use flappy::{FlappyGame, FlappyInput, Pipe};
pub use menu::GameMenu;

use crate::core::{RoundResults, RoundSettings, ScenePhase, SoundCue};
use rand::Rng;

/// Which game to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    Fruit,
    Flappy,
    Coin,
}

impl GameKind {
    pub const ALL: [GameKind; 3] = [GameKind::Fruit, GameKind::Flappy, GameKind::Coin];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(GameKind::Fruit)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Fruit => CatchVariant::Fruit.name(),
            Self::Flappy => FlappyGame::NAME,
            Self::Coin => CatchVariant::Coin.name(),
        }
    }

    /// Command-line key.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Fruit => "fruit",
            Self::Flappy => "flappy",
            Self::Coin => "coin",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.key().eq_ignore_ascii_case(s))
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Fruit => "Catch the falling apple with your basket",
            Self::Flappy => "Flap through the pipe gaps without crashing",
            Self::Coin => "Grab as many raining coins as you can",
        }
    }
}

/// The scene currently on screen. Only one can be active at a time.
#[derive(Debug, Clone)]
pub enum ActiveGame {
    Catch(CatchGame),
    Flappy(FlappyGame),
}

impl ActiveGame {
    /// Create a fresh, paused scene for `kind`.
    pub fn start(kind: GameKind, settings: RoundSettings) -> Self {
        match kind {
            GameKind::Fruit => Self::Catch(CatchGame::new(CatchVariant::Fruit, settings)),
            GameKind::Coin => Self::Catch(CatchGame::new(CatchVariant::Coin, settings)),
            GameKind::Flappy => Self::Flappy(FlappyGame::new(settings)),
        }
    }

    pub fn kind(&self) -> GameKind {
        match self {
            Self::Catch(game) => match game.variant {
                CatchVariant::Fruit => GameKind::Fruit,
                CatchVariant::Coin => GameKind::Coin,
            },
            Self::Flappy(_) => GameKind::Flappy,
        }
    }

    /// Advance the active scene by `dt_ms`.
    pub fn tick<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) -> bool {
        match self {
            Self::Catch(game) => catch::tick(game, dt_ms, rng),
            Self::Flappy(game) => flappy::tick(game, dt_ms, rng),
        }
    }

    pub fn phase(&self) -> ScenePhase {
        match self {
            Self::Catch(game) => game.phase,
            Self::Flappy(game) => game.phase,
        }
    }

    pub fn score(&self) -> u32 {
        match self {
            Self::Catch(game) => game.score,
            Self::Flappy(game) => game.score,
        }
    }

    pub fn results(&self) -> Option<RoundResults> {
        match self {
            Self::Catch(game) => game.results(),
            Self::Flappy(game) => game.results(),
        }
    }

    /// Take the sound cues raised since the last call.
    pub fn drain_cues(&mut self) -> Vec<SoundCue> {
        match self {
            Self::Catch(game) => std::mem::take(&mut game.pending_cues),
            Self::Flappy(game) => std::mem::take(&mut game.pending_cues),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_index() {
        assert_eq!(GameKind::from_index(0), GameKind::Fruit);
        assert_eq!(GameKind::from_index(1), GameKind::Flappy);
        assert_eq!(GameKind::from_index(2), GameKind::Coin);
        assert_eq!(GameKind::from_index(99), GameKind::Fruit);
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(GameKind::parse("fruit"), Some(GameKind::Fruit));
        assert_eq!(GameKind::parse("FLAPPY"), Some(GameKind::Flappy));
        assert_eq!(GameKind::parse("coin"), Some(GameKind::Coin));
        assert_eq!(GameKind::parse("chess"), None);
    }

    #[test]
    fn test_start_round_trips_kind() {
        for kind in GameKind::ALL {
            let game = ActiveGame::start(kind, RoundSettings::default());
            assert_eq!(game.kind(), kind);
            assert_eq!(game.phase(), ScenePhase::WaitingToStart);
            assert_eq!(game.score(), 0);
            assert!(game.results().is_none());
        }
    }

    #[test]
    fn test_drain_cues_empties_queue() {
        let mut game = ActiveGame::start(GameKind::Coin, RoundSettings::default());
        assert_eq!(game.drain_cues(), vec![SoundCue::BackgroundMusic]);
        assert!(game.drain_cues().is_empty());
    }
}
