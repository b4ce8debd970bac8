//! Per-tick simulation step
//!
//! All motion is in fixed per-tick units; wall-clock frame time never scales
//! physics.

use super::collision::resolve_collisions;
use super::spawn::maybe_spawn;
use super::state::GameState;
use crate::consts::*;

/// Object speed multiplier for a given score
#[inline]
pub fn difficulty_for(score: u64) -> f32 {
    (1.0 + score as f32 * DIFFICULTY_STEP).min(DIFFICULTY_MAX)
}

/// Per-tick spawn probability for a given score
#[inline]
pub fn spawn_rate_for(score: u64) -> f32 {
    (SPAWN_RATE_BASE + score as f32 * SPAWN_RATE_STEP).min(SPAWN_RATE_MAX)
}

/// Advance every store by one tick and drop expired entities
///
/// Recomputes difficulty and spawn rate from the current score afterwards.
pub fn integrate(state: &mut GameState) {
    let field_width = state.field.x;

    // Plasma shots travel right until fully past the right edge
    state.projectiles.retain_mut(|shot| {
        shot.pos.x += shot.speed;
        shot.pos.x < field_width + shot.size.x
    });

    // Objects drift left, faster as difficulty climbs; escaping costs nothing
    let difficulty = state.difficulty;
    state.objects.retain_mut(|obj| {
        obj.pos.x -= obj.speed * difficulty;
        obj.rotation += obj.rotation_speed;
        if obj.pos.x < -obj.size.x {
            log::debug!("{} escaped off screen", obj.kind.as_str());
            return false;
        }
        true
    });

    state.particles.retain_mut(|p| {
        p.pos += p.vel;
        p.life = p.life.saturating_sub(1);
        p.alpha = p.life as f32 / p.max_life as f32;
        p.life > 0
    });

    state.difficulty = difficulty_for(state.score);
    state.spawn_rate = spawn_rate_for(state.score);
}

/// Run one simulation tick: spawner, integrator, then collisions
///
/// Does nothing unless the game is running.
pub fn tick(state: &mut GameState) {
    if !state.is_running() {
        return;
    }

    maybe_spawn(state);
    integrate(state);
    resolve_collisions(state);

    state.time_ticks += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{FallingObject, ObjectKind, Particle, Projectile};
    use glam::Vec2;
    use proptest::prelude::*;

    fn object(x: f32, w: f32, speed: f32) -> FallingObject {
        FallingObject {
            pos: Vec2::new(x, 100.0),
            size: Vec2::new(w, w),
            speed,
            kind: ObjectKind::Asteroid,
            rotation: 0.0,
            rotation_speed: 0.01,
        }
    }

    #[test]
    fn test_difficulty_formula() {
        assert_eq!(difficulty_for(0), 1.0);
        assert!((difficulty_for(500) - 1.5).abs() < 1e-6);
        assert_eq!(difficulty_for(2000), 3.0);
        assert_eq!(difficulty_for(1_000_000), 3.0);
    }

    #[test]
    fn test_spawn_rate_formula() {
        assert!((spawn_rate_for(0) - 0.02).abs() < 1e-7);
        assert!((spawn_rate_for(1000) - 0.03).abs() < 1e-6);
        assert_eq!(spawn_rate_for(5000), 0.05);
        assert_eq!(spawn_rate_for(u64::MAX), 0.05);
    }

    #[test]
    fn test_projectile_moves_and_exits() {
        let mut state = GameState::new(1, 800.0, 600.0);
        state.projectiles.push(Projectile::new(Vec2::new(100.0, 50.0)));
        integrate(&mut state);
        assert_eq!(state.projectiles[0].pos.x, 108.0);

        // Dropped once x reaches 800 + 8
        state.projectiles[0].pos.x = 800.0;
        integrate(&mut state);
        assert!(state.projectiles.is_empty());

        state.projectiles.push(Projectile::new(Vec2::new(799.0, 50.0)));
        integrate(&mut state);
        assert_eq!(state.projectiles.len(), 1);
    }

    #[test]
    fn test_object_moves_with_difficulty_and_spins() {
        let mut state = GameState::new(1, 800.0, 600.0);
        state.difficulty = 2.0;
        state.objects.push(object(400.0, 40.0, 3.0));
        integrate(&mut state);
        assert_eq!(state.objects[0].pos.x, 394.0);
        assert_eq!(state.objects[0].rotation, 0.01);
        // Score is still 0, so the multiplier falls back to 1
        assert_eq!(state.difficulty, 1.0);
    }

    #[test]
    fn test_object_past_left_edge_is_dropped() {
        let mut state = GameState::new(1, 800.0, 600.0);
        // Right edge one unit past the left boundary
        state.objects.push(object(-41.0, 40.0, 3.0));
        integrate(&mut state);
        assert!(state.objects.is_empty());

        // Still partly on screen, even when stationary
        state.objects.push(object(-39.0, 40.0, 0.0));
        integrate(&mut state);
        assert_eq!(state.objects.len(), 1);
    }

    #[test]
    fn test_particles_fade_and_expire() {
        let mut state = GameState::new(1, 800.0, 600.0);
        state.particles.push(Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(1.0, -2.0),
            life: 2,
            max_life: 4,
            alpha: 0.5,
            hue: 30.0,
        });
        integrate(&mut state);
        assert_eq!(state.particles[0].pos, Vec2::new(1.0, -2.0));
        assert_eq!(state.particles[0].life, 1);
        assert_eq!(state.particles[0].alpha, 0.25);
        integrate(&mut state);
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_tick_skipped_when_over() {
        let mut state = GameState::new(1, 800.0, 600.0);
        state.projectiles.push(Projectile::new(Vec2::new(100.0, 50.0)));
        state.game_over();
        tick(&mut state);
        assert_eq!(state.projectiles[0].pos.x, 100.0);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut a = GameState::new(99999, 800.0, 600.0);
        let mut b = GameState::new(99999, 800.0, 600.0);
        for _ in 0..600 {
            tick(&mut a);
            tick(&mut b);
        }
        assert_eq!(a.objects.len(), b.objects.len());
        for (oa, ob) in a.objects.iter().zip(&b.objects) {
            assert_eq!(oa.pos, ob.pos);
            assert_eq!(oa.kind, ob.kind);
        }
    }

    proptest! {
        #[test]
        fn prop_ramps_match_formula_regardless_of_history(scores in proptest::collection::vec(0u64..10_000, 1..20)) {
            let mut state = GameState::new(3, 800.0, 600.0);
            for score in scores {
                state.score = score;
                integrate(&mut state);
                prop_assert_eq!(state.difficulty, (1.0 + score as f32 * 0.001).min(3.0));
                prop_assert_eq!(state.spawn_rate, (0.02 + score as f32 * 0.00001).min(0.05));
            }
        }

        #[test]
        fn prop_ramps_are_monotonic(a in 0u64..100_000, b in 0u64..100_000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(difficulty_for(lo) <= difficulty_for(hi));
            prop_assert!(spawn_rate_for(lo) <= spawn_rate_for(hi));
        }
    }
}
