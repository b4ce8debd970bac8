//! Simulation module
//!
//! Owns the per-tick rules: spawning, motion, hit-testing and scoring.
//! Everything here is total and deterministic for a given seed.

pub mod actions;
pub mod collision;
pub mod geometry;
pub mod spawn;
pub mod state;
pub mod tick;

pub use actions::{TurretInput, apply_input, move_turret, shoot};
pub use collision::{Hit, find_hits, resolve_collisions, spawn_explosion};
pub use geometry::{Rect, is_colliding};
pub use spawn::{maybe_spawn, spawn_object};
pub use state::{
    FallingObject, GameEvent, GamePhase, GameState, ObjectKind, Particle, Projectile, Turret,
};
pub use tick::{difficulty_for, integrate, spawn_rate_for, tick};
