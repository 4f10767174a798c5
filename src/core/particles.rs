//! Burst particle emitter that follows a point (the player).

use super::constants::{
    EMITTER_DURATION_MS, EMITTER_GRAVITY_Y, EMITTER_SPEED, PARTICLE_LIFESPAN_MS,
};
use rand::Rng;
use std::f64::consts::TAU;

/// A single live particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// Milliseconds left before the particle disappears.
    pub life_ms: u64,
}

/// Emits particles at its follow point for `duration_ms` after each `start()`.
#[derive(Debug, Clone)]
pub struct Emitter {
    pub speed: f64,
    pub gravity_y: f64,
    pub duration_ms: u64,
    pub lifespan_ms: u64,
    /// Current follow point (world pixels).
    pub follow_x: f64,
    pub follow_y: f64,
    /// Time left in the current burst; zero means not emitting.
    pub emit_remaining_ms: u64,
    pub particles: Vec<Particle>,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    pub fn new() -> Self {
        Self {
            speed: EMITTER_SPEED,
            gravity_y: EMITTER_GRAVITY_Y,
            duration_ms: EMITTER_DURATION_MS,
            lifespan_ms: PARTICLE_LIFESPAN_MS,
            follow_x: 0.0,
            follow_y: 0.0,
            emit_remaining_ms: 0,
            particles: Vec::new(),
        }
    }

    /// Begin (or restart) a burst.
    pub fn start(&mut self) {
        self.emit_remaining_ms = self.duration_ms;
    }

    pub fn follow(&mut self, x: f64, y: f64) {
        self.follow_x = x;
        self.follow_y = y;
    }

    /// Advance all particles by `dt_ms`, spawning one new particle if a
    /// burst is active.
    pub fn step<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) {
        let dt = dt_ms as f64 / 1000.0;

        for p in &mut self.particles {
            p.vy += self.gravity_y * dt;
            p.x += p.vx * dt;
            p.y += p.vy * dt;
            p.life_ms = p.life_ms.saturating_sub(dt_ms);
        }
        self.particles.retain(|p| p.life_ms > 0);

        if self.emit_remaining_ms > 0 {
            let angle = rng.gen_range(0.0..TAU);
            self.particles.push(Particle {
                x: self.follow_x,
                y: self.follow_y,
                vx: angle.cos() * self.speed,
                vy: angle.sin() * self.speed,
                life_ms: self.lifespan_ms,
            });
            self.emit_remaining_ms = self.emit_remaining_ms.saturating_sub(dt_ms);
        }
    }
}
