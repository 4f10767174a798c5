//! Catch game logic: player movement, falling targets, overlap scoring.

use super::types::{CatchGame, CatchVariant, Target};
use crate::core::constants::{
    BASKET_WIDTH, COIN_FALL_SPEED, COIN_SPAWN_INTERVAL_MS, MAX_FRAME_DT_MS, PHYSICS_TICK_MS,
    SPEED_DOWN, WORLD_HEIGHT, WORLD_WIDTH,
};
use crate::core::{EndReason, RoundResults, ScenePhase, SoundCue};
use log::{debug, info};
use rand::Rng;

/// UI-agnostic input actions for the catch games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatchInput {
    Start,   // Space or Enter
    Left,    // Left arrow / A
    Right,   // Right arrow / D
    Stop,    // Direction key released
    Forfeit, // Esc
    Other,   // Any other key (cancels forfeit_pending)
}

/// Process player input.
pub fn process_input(game: &mut CatchGame, input: CatchInput) {
    match game.phase {
        ScenePhase::Over => return,
        ScenePhase::WaitingToStart => {
            if input == CatchInput::Start {
                game.phase = ScenePhase::Running;
                info!("{} started", game.variant.name());
            }
            return;
        }
        ScenePhase::Running => {}
    }

    match input {
        CatchInput::Forfeit => {
            if game.forfeit_pending {
                game.forfeited = true;
                end_round(game, EndReason::Forfeit);
            } else {
                game.forfeit_pending = true;
                game.player_vx = 0.0;
            }
        }
        // Releasing a key is not a decision about the forfeit prompt
        CatchInput::Stop => game.player_vx = 0.0,
        _ if game.forfeit_pending => {
            game.forfeit_pending = false;
        }
        CatchInput::Left => game.player_vx = -game.settings.player_speed,
        CatchInput::Right => game.player_vx = game.settings.player_speed,
        CatchInput::Start | CatchInput::Other => {}
    }
}

/// Advance the scene. `dt_ms` is milliseconds since the last call; physics
/// runs in fixed 16ms steps. Returns true if the state changed.
pub fn tick<R: Rng>(game: &mut CatchGame, dt_ms: u64, rng: &mut R) -> bool {
    if game.phase != ScenePhase::Running || game.forfeit_pending {
        return false;
    }

    let dt_ms = dt_ms.min(MAX_FRAME_DT_MS);
    game.accumulated_time_ms += dt_ms;
    let mut changed = false;

    while game.accumulated_time_ms >= PHYSICS_TICK_MS {
        game.accumulated_time_ms -= PHYSICS_TICK_MS;
        step_physics(game, rng);
        changed = true;

        if game.phase == ScenePhase::Over {
            break;
        }
    }

    changed
}

/// Single 16ms physics step.
fn step_physics<R: Rng>(game: &mut CatchGame, rng: &mut R) {
    let dt = PHYSICS_TICK_MS as f64 / 1000.0;

    // 1. Round timer
    if game.countdown.advance(PHYSICS_TICK_MS) {
        game.pending_cues.push(SoundCue::TimeUp);
        end_round(game, EndReason::TimeUp);
        return;
    }

    // 2. Player, clamped to the world bounds
    game.player_x =
        (game.player_x + game.player_vx * dt).clamp(0.0, WORLD_WIDTH - BASKET_WIDTH);

    // 3. Targets
    match game.variant {
        CatchVariant::Fruit => {
            for target in &mut game.targets {
                target.vy = (target.vy + SPEED_DOWN * dt).min(SPEED_DOWN);
                target.y += target.vy * dt;
                if target.y > WORLD_HEIGHT {
                    target.y = 0.0;
                }
            }
        }
        CatchVariant::Coin => {
            game.spawn_timer_ms = game.spawn_timer_ms.saturating_sub(PHYSICS_TICK_MS);
            if game.spawn_timer_ms == 0 {
                let size = game.variant.target_size();
                game.targets.push(Target {
                    x: CatchGame::random_x(rng),
                    y: 0.0,
                    vy: COIN_FALL_SPEED,
                    size,
                });
                game.spawn_timer_ms = COIN_SPAWN_INTERVAL_MS;
            }
            for target in &mut game.targets {
                target.y += target.vy * dt;
            }
            game.targets.retain(|t| t.y <= WORLD_HEIGHT);
        }
    }

    // 4. Overlaps
    check_catches(game, rng);

    // 5. Particles ride along with the basket
    game.sync_emitter();
    game.emitter.step(PHYSICS_TICK_MS, rng);
}

/// Score every target overlapping the basket's catching strip.
fn check_catches<R: Rng>(game: &mut CatchGame, rng: &mut R) {
    let hitbox = game.player_hitbox();

    match game.variant {
        CatchVariant::Fruit => {
            let mut hits = 0;
            for target in &mut game.targets {
                if target.bounds().overlaps(&hitbox) {
                    target.y = 0.0;
                    target.x = CatchGame::random_x(rng);
                    hits += 1;
                }
            }
            for _ in 0..hits {
                target_hit(game);
            }
        }
        CatchVariant::Coin => {
            let before = game.targets.len();
            game.targets.retain(|t| !t.bounds().overlaps(&hitbox));
            for _ in 0..before - game.targets.len() {
                target_hit(game);
            }
        }
    }
}

fn target_hit(game: &mut CatchGame) {
    game.pending_cues.push(SoundCue::Catch);
    game.emitter.start();
    game.score += 1;
    debug!("{} catch, score {}", game.variant.name(), game.score);
}

fn end_round(game: &mut CatchGame, reason: EndReason) {
    game.phase = ScenePhase::Over;
    game.forfeit_pending = false;
    game.player_vx = 0.0;
    info!(
        "{} over ({:?}) with score {}",
        game.variant.name(),
        reason,
        game.score
    );
}

impl CatchGame {
    /// Results overlay content, available once the round is over.
    pub fn results(&self) -> Option<RoundResults> {
        if self.phase != ScenePhase::Over {
            return None;
        }
        let reason = if self.forfeited {
            EndReason::Forfeit
        } else {
            EndReason::TimeUp
        };
        Some(RoundResults {
            game_name: self.variant.name(),
            score: self.score,
            threshold: self.settings.win_threshold,
            reason,
        })
    }
}
