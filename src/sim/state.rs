//! Game state and core simulation types
//!
//! The whole run lives in one `GameState` owned by the loop driver.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended, waiting for restart
    GameOver,
}

/// The player's turret (moves vertically only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turret {
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per input sample
    pub speed: f32,
}

impl Turret {
    /// Fresh turret on the left side, vertically at half the field height
    pub fn new(field_height: f32) -> Self {
        Self {
            pos: Vec2::new(TURRET_X, field_height / 2.0),
            size: Vec2::new(TURRET_WIDTH, TURRET_HEIGHT),
            speed: TURRET_SPEED,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Spawn point for a new projectile: right edge, just above center
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(
            self.pos.x + self.size.x,
            self.pos.y + self.size.y / 2.0 - PROJECTILE_HEIGHT / 2.0 - MUZZLE_RISE,
        )
    }
}

/// A plasma shot travelling right
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
}

impl Projectile {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            speed: PROJECTILE_SPEED,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// Falling object types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    Asteroid,
    Enemy,
    Powerup,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 3] = [ObjectKind::Asteroid, ObjectKind::Enemy, ObjectKind::Powerup];

    /// Points awarded for destroying this kind
    pub fn points(self) -> u64 {
        match self {
            ObjectKind::Enemy => SCORE_ENEMY,
            ObjectKind::Asteroid => SCORE_ASTEROID,
            ObjectKind::Powerup => SCORE_POWERUP,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Asteroid => "asteroid",
            ObjectKind::Enemy => "enemy",
            ObjectKind::Powerup => "powerup",
        }
    }
}

/// An object drifting from the right edge toward the left
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallingObject {
    pub pos: Vec2,
    pub size: Vec2,
    /// Base leftward speed (scaled by difficulty each tick)
    pub speed: f32,
    pub kind: ObjectKind,
    /// Visual rotation (radians), not used for hit-testing
    pub rotation: f32,
    pub rotation_speed: f32,
}

impl FallingObject {
    pub fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// A particle for explosion bursts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Ticks remaining
    pub life: u32,
    pub max_life: u32,
    /// life / max_life, refreshed every tick
    pub alpha: f32,
    /// Hue in degrees (saturation/lightness are fixed)
    pub hue: f32,
}

impl Particle {
    /// CSS color string for canvas fills
    pub fn css_color(&self) -> String {
        format!("hsl({:.1}, 100%, 60%)", self.hue)
    }
}

/// Notifications for the presentation layer, drained once per step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A projectile left the turret
    Shot,
    /// The turret moved for the first time this run
    FirstMove,
    /// An object was destroyed by a projectile
    ObjectDestroyed { kind: ObjectKind, center: Vec2 },
    /// Score changed (new total)
    ScoreChanged(u64),
    /// Run ended (final score)
    GameOver(u64),
    /// Stores and score were reset
    Restarted,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Score (only ever increases within a run)
    pub score: u64,
    /// Object speed multiplier, derived from score
    pub difficulty: f32,
    /// Per-tick spawn probability, derived from score
    pub spawn_rate: f32,
    /// One-shot flag set on the first successful turret move
    pub player_has_moved: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Play field size (canvas width, height)
    pub field: Vec2,
    /// Player turret
    pub turret: Turret,
    /// Active projectiles (in firing order)
    pub projectiles: Vec<Projectile>,
    /// Active falling objects (in spawn order)
    pub objects: Vec<FallingObject>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Pending notifications for the presentation layer
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a running game on a field of the given size
    pub fn new(seed: u64, width: f32, height: f32) -> Self {
        Self {
            seed,
            phase: GamePhase::Running,
            score: 0,
            difficulty: 1.0,
            spawn_rate: INITIAL_SPAWN_RATE,
            player_has_moved: false,
            time_ticks: 0,
            field: Vec2::new(width, height),
            turret: Turret::new(height),
            projectiles: Vec::new(),
            objects: Vec::new(),
            particles: Vec::new(),
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Add points and notify the presentation layer
    pub fn award(&mut self, points: u64) {
        self.score += points;
        self.events.push(GameEvent::ScoreChanged(self.score));
    }

    /// End the run. No-op if already over.
    pub fn game_over(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.events.push(GameEvent::GameOver(self.score));
    }

    /// Full reset of stores, score and turret; back to Running.
    ///
    /// The RNG keeps its stream so consecutive runs differ.
    pub fn restart(&mut self) {
        self.phase = GamePhase::Running;
        self.score = 0;
        self.difficulty = 1.0;
        self.spawn_rate = INITIAL_SPAWN_RATE;
        self.player_has_moved = false;
        self.projectiles.clear();
        self.objects.clear();
        self.particles.clear();
        self.turret = Turret::new(self.field.y);
        self.events.push(GameEvent::Restarted);
        self.events.push(GameEvent::ScoreChanged(0));
    }

    /// Resize the field and re-center the turret vertically
    pub fn resize(&mut self, width: f32, height: f32) {
        self.field = Vec2::new(width, height);
        self.turret.pos.y = height / 2.0;
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_running() {
        let state = GameState::new(1, 800.0, 600.0);
        assert!(state.is_running());
        assert_eq!(state.score, 0);
        assert_eq!(state.turret.pos, Vec2::new(TURRET_X, 300.0));
        assert!(state.projectiles.is_empty());
        assert!(state.objects.is_empty());
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_muzzle_position() {
        let turret = Turret::new(600.0);
        // (50 + 80, 300 + 30 - 2 - 15)
        assert_eq!(turret.muzzle(), Vec2::new(130.0, 313.0));
    }

    #[test]
    fn test_points_table() {
        assert_eq!(ObjectKind::Enemy.points(), 100);
        assert_eq!(ObjectKind::Asteroid.points(), 50);
        assert_eq!(ObjectKind::Powerup.points(), 200);
    }

    #[test]
    fn test_game_over_is_idempotent() {
        let mut state = GameState::new(1, 800.0, 600.0);
        state.score = 250;
        state.game_over();
        state.game_over();
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.drain_events(), vec![GameEvent::GameOver(250)]);
    }

    #[test]
    fn test_resize_recenters_turret() {
        let mut state = GameState::new(1, 800.0, 600.0);
        state.turret.pos.y = 12.0;
        state.resize(1024.0, 768.0);
        assert_eq!(state.field, Vec2::new(1024.0, 768.0));
        assert_eq!(state.turret.pos.y, 384.0);
    }

    #[test]
    fn test_particle_css_color() {
        let p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            life: 30,
            max_life: 30,
            alpha: 1.0,
            hue: 42.0,
        };
        assert_eq!(p.css_color(), "hsl(42.0, 100%, 60%)");
    }
}
