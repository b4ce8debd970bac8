//! Plasma Blaster - A single-screen arcade shooter
//!
//! Core modules:
//! - `sim`: Simulation (spawning, motion, collisions, scoring)
//! - `game`: Loop driver and the presentation adapter seam
//! - `platform`: Held-key tracking and input intents
//! - `audio`: Round-robin sound pool
//! - `renderer`: Canvas 2D presentation adapter (wasm only)
//! - `settings`: Runtime configuration

pub mod audio;
pub mod error;
pub mod game;
pub mod platform;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::InitError;
pub use game::{Game, Presenter, SoundSink};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Turret placement (fixed on the left side)
    pub const TURRET_X: f32 = 50.0;
    pub const TURRET_WIDTH: f32 = 80.0;
    pub const TURRET_HEIGHT: f32 = 60.0;
    /// Vertical pixels per input sample
    pub const TURRET_SPEED: f32 = 5.0;

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: f32 = 8.0;
    pub const PROJECTILE_HEIGHT: f32 = 4.0;
    pub const PROJECTILE_SPEED: f32 = 8.0;
    /// Muzzle sits this far above the turret's vertical center
    pub const MUZZLE_RISE: f32 = 15.0;

    /// Falling objects
    pub const MAX_OBJECTS: usize = 8;
    /// Objects enter this far past the right edge, and never spawn within it of the bottom
    pub const SPAWN_MARGIN: f32 = 40.0;
    pub const OBJECT_MIN_SIZE: f32 = 30.0;
    pub const OBJECT_MAX_SIZE: f32 = 50.0;
    pub const OBJECT_MIN_SPEED: f32 = 2.0;
    pub const OBJECT_MAX_SPEED: f32 = 5.0;
    /// Rotation speed is drawn from [-x, x)
    pub const OBJECT_MAX_SPIN: f32 = 0.05;

    /// Explosion burst
    pub const BURST_SIZE: usize = 8;
    pub const PARTICLE_LIFE: u32 = 30;
    /// Particle velocity components are drawn from [-x, x)
    pub const PARTICLE_MAX_SPEED: f32 = 4.0;
    /// Warm hue band (degrees): [base, base + span)
    pub const PARTICLE_HUE_BASE: f32 = 20.0;
    pub const PARTICLE_HUE_SPAN: f32 = 60.0;

    /// Points per destroyed object
    pub const SCORE_ENEMY: u64 = 100;
    pub const SCORE_ASTEROID: u64 = 50;
    pub const SCORE_POWERUP: u64 = 200;

    /// Difficulty ramp: speed multiplier = min(MAX, 1 + score * STEP)
    pub const DIFFICULTY_STEP: f32 = 0.001;
    pub const DIFFICULTY_MAX: f32 = 3.0;
    /// Spawn ramp: probability = min(MAX, BASE + score * STEP)
    pub const SPAWN_RATE_BASE: f32 = 0.02;
    pub const SPAWN_RATE_STEP: f32 = 0.00001;
    pub const SPAWN_RATE_MAX: f32 = 0.05;
    /// Spawn probability before the first tick recomputes it
    pub const INITIAL_SPAWN_RATE: f32 = 0.05;

    /// Input sampling cadence (~60 Hz)
    pub const INPUT_INTERVAL_MS: u32 = 16;

    /// Pew sound pool
    pub const PEW_POOL_SIZE: usize = 5;
    pub const PEW_VOLUME: f32 = 0.5;
}
