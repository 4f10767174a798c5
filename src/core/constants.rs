// World dimensions (logical pixels, origin top-left)
pub const WORLD_WIDTH: f64 = 500.0;
pub const WORLD_HEIGHT: f64 = 500.0;

// Gravity and fall speed share one tuning value
pub const SPEED_DOWN: f64 = 200.0;
pub const PLAYER_SPEED: f64 = SPEED_DOWN + 50.0;

// Round timing
pub const ROUND_DURATION_MS: u64 = 30_000;
pub const WIN_THRESHOLD: u32 = 10;
pub const MAX_ROUND_SECONDS: u64 = 3600;

// Frame loop
pub const PHYSICS_TICK_MS: u64 = 16;
pub const MAX_FRAME_DT_MS: u64 = 100;
pub const FRAME_POLL_MS: u64 = 16;

// Held-key window for terminals without release events. Must outlast the
// initial key-repeat delay (typically 500-660ms).
pub const KEY_HOLD_MS: u64 = 700;

// Sprite sizes
pub const BASKET_WIDTH: f64 = 100.0;
pub const BASKET_HEIGHT: f64 = 100.0;
pub const APPLE_SIZE: f64 = 40.0;
pub const COIN_SIZE: f64 = 30.0;
pub const BIRD_WIDTH: f64 = 34.0;
pub const BIRD_HEIGHT: f64 = 24.0;
pub const PIPE_WIDTH: f64 = 60.0;

// Catch targets spawn in [0, WORLD_WIDTH - TARGET_SPAWN_MARGIN)
pub const TARGET_SPAWN_MARGIN: f64 = 100.0;

// Coin variant
pub const COIN_SPAWN_INTERVAL_MS: u64 = 800;
pub const COIN_FALL_SPEED: f64 = 180.0;

// Flappy variant
pub const BIRD_X: f64 = 100.0;
pub const FLAPPY_GRAVITY: f64 = 800.0;
pub const FLAP_VELOCITY: f64 = -300.0;
pub const BIRD_TERMINAL_VELOCITY: f64 = 500.0;
pub const PIPE_SPEED: f64 = 150.0;
pub const PIPE_GAP: f64 = 150.0;
pub const PIPE_GAP_MARGIN: f64 = 40.0;
pub const PIPE_SPAWN_INTERVAL_MS: u64 = 1500;

// Particle burst on catch
pub const EMITTER_SPEED: f64 = 100.0;
pub const EMITTER_GRAVITY_Y: f64 = SPEED_DOWN - 200.0;
pub const EMITTER_DURATION_MS: u64 = 100;
pub const PARTICLE_LIFESPAN_MS: u64 = 1000;

// File names under ~/.arcade/
pub const CONFIG_FILENAME: &str = "config.json";
pub const LOG_FILENAME: &str = "arcade.log";
