//! Game logic for Flappy Dodger: gravity, flapping, pipe scrolling, collisions.

use super::types::FlappyGame;
use crate::core::constants::{
    BIRD_HEIGHT, BIRD_TERMINAL_VELOCITY, BIRD_X, FLAPPY_GRAVITY, FLAP_VELOCITY, MAX_FRAME_DT_MS,
    PHYSICS_TICK_MS, PIPE_SPAWN_INTERVAL_MS, PIPE_SPEED, WORLD_HEIGHT,
};
use crate::core::{EndReason, RoundResults, ScenePhase, SoundCue};
use log::{debug, info};
use rand::Rng;

/// Input actions for Flappy Dodger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyInput {
    /// Flap (Space, Enter or Up). Also the start button.
    Flap,
    /// Forfeit (Esc).
    Forfeit,
    /// Any other key.
    Other,
}

/// Process player input.
pub fn process_input(game: &mut FlappyGame, input: FlappyInput) {
    match game.phase {
        ScenePhase::Over => return,
        ScenePhase::WaitingToStart => {
            if input == FlappyInput::Flap {
                game.phase = ScenePhase::Running;
                game.flap_queued = true;
                info!("{} started", FlappyGame::NAME);
            }
            return;
        }
        ScenePhase::Running => {}
    }

    match input {
        FlappyInput::Flap => {
            if game.forfeit_pending {
                // Any non-Esc key cancels forfeit
                game.forfeit_pending = false;
                return;
            }
            game.flap_queued = true;
        }
        FlappyInput::Forfeit => {
            if game.forfeit_pending {
                end_round(game, EndReason::Forfeit);
            } else {
                game.forfeit_pending = true;
            }
        }
        FlappyInput::Other => {
            game.forfeit_pending = false;
        }
    }
}

/// Advance the scene by `dt_ms`, stepping physics in fixed 16ms increments.
/// Returns true if the game state changed.
pub fn tick<R: Rng>(game: &mut FlappyGame, dt_ms: u64, rng: &mut R) -> bool {
    if game.phase != ScenePhase::Running || game.forfeit_pending {
        return false;
    }

    // Clamp dt to prevent physics explosion after pause/lag
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

/// Single physics step (16ms tick).
fn step_physics<R: Rng>(game: &mut FlappyGame, rng: &mut R) {
    let dt = PHYSICS_TICK_MS as f64 / 1000.0;

    // 1. Round timer
    if game.countdown.advance(PHYSICS_TICK_MS) {
        game.pending_cues.push(SoundCue::TimeUp);
        end_round(game, EndReason::TimeUp);
        return;
    }

    // 2. Consume buffered flap (sets velocity, not additive)
    if game.flap_queued {
        game.bird_vy = FLAP_VELOCITY;
        game.flap_queued = false;
        game.pending_cues.push(SoundCue::Flap);
    }

    // 3. Gravity
    game.bird_vy = (game.bird_vy + FLAPPY_GRAVITY * dt).min(BIRD_TERMINAL_VELOCITY);
    game.bird_y += game.bird_vy * dt;

    // 4. Ceiling clamps, floor kills
    if game.bird_y < 0.0 {
        game.bird_y = 0.0;
        game.bird_vy = 0.0;
    }
    if game.bird_y + BIRD_HEIGHT >= WORLD_HEIGHT {
        game.bird_y = WORLD_HEIGHT - BIRD_HEIGHT;
        crash(game);
        return;
    }

    // 5. Scroll pipes and drop the ones that left the screen
    for pipe in &mut game.pipes {
        pipe.x -= PIPE_SPEED * dt;
    }
    game.pipes.retain(|p| p.right() > 0.0);

    // 6. Score pipes the bird has cleared
    for pipe in &mut game.pipes {
        if !pipe.passed && pipe.right() < BIRD_X {
            pipe.passed = true;
            game.score += 1;
            debug!("{} pipe passed, score {}", FlappyGame::NAME, game.score);
        }
    }

    // 7. Spawn
    game.spawn_timer_ms = game.spawn_timer_ms.saturating_sub(PHYSICS_TICK_MS);
    if game.spawn_timer_ms == 0 {
        game.spawn_pipe(rng);
        game.spawn_timer_ms = PIPE_SPAWN_INTERVAL_MS;
    }

    // 8. Collisions
    if check_collisions(game) {
        crash(game);
    }
}

/// True if the bird overlaps any solid pipe column.
fn check_collisions(game: &FlappyGame) -> bool {
    let bird = game.bird_bounds();
    game.pipes
        .iter()
        .flat_map(|pipe| pipe.columns())
        .any(|column| column.overlaps(&bird))
}

fn crash(game: &mut FlappyGame) {
    game.pending_cues.push(SoundCue::Crash);
    end_round(game, EndReason::Crashed);
}

fn end_round(game: &mut FlappyGame, reason: EndReason) {
    game.phase = ScenePhase::Over;
    game.end_reason = Some(reason);
    game.forfeit_pending = false;
    info!(
        "{} over ({:?}) with score {}",
        FlappyGame::NAME,
        reason,
        game.score
    );
}

impl FlappyGame {
    /// Results overlay content, available once the round is over.
    pub fn results(&self) -> Option<RoundResults> {
        let reason = self.end_reason?;
        Some(RoundResults {
            game_name: Self::NAME,
            score: self.score,
            threshold: self.settings.win_threshold,
            reason,
        })
    }
}
