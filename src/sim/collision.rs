//! Projectile/object hit detection, scoring and explosion bursts
//!
//! Hits are resolved in two passes: first every projectile is paired with the
//! first still-intact object it overlaps (store order), then both stores are
//! filtered once. Nothing is removed while iterating.

use glam::Vec2;
use rand::Rng;

use super::geometry::is_colliding;
use super::state::{GameEvent, GameState, Particle};
use crate::consts::*;

/// A resolved projectile/object pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub projectile: usize,
    pub object: usize,
}

/// Pair projectiles with the objects they destroy this tick
///
/// Each projectile and each object takes part in at most one hit.
pub fn find_hits(state: &GameState) -> Vec<Hit> {
    let mut consumed = vec![false; state.objects.len()];
    let mut hits = Vec::new();

    for (pi, shot) in state.projectiles.iter().enumerate() {
        let shot_box = shot.bounds();
        let target = state
            .objects
            .iter()
            .enumerate()
            .find(|(oi, obj)| !consumed[*oi] && is_colliding(&shot_box, &obj.bounds()));

        if let Some((oi, _)) = target {
            consumed[oi] = true;
            hits.push(Hit {
                projectile: pi,
                object: oi,
            });
        }
    }

    hits
}

/// Resolve all hits for this tick: remove the pairs, award points, emit bursts
///
/// Returns the number of objects destroyed.
pub fn resolve_collisions(state: &mut GameState) -> usize {
    let hits = find_hits(state);
    if hits.is_empty() {
        return 0;
    }

    let mut dead_shots = vec![false; state.projectiles.len()];
    let mut dead_objects = vec![false; state.objects.len()];

    for hit in &hits {
        dead_shots[hit.projectile] = true;
        dead_objects[hit.object] = true;

        let obj = &state.objects[hit.object];
        let kind = obj.kind;
        let center = obj.bounds().center();

        spawn_explosion(state, center);
        state.events.push(GameEvent::ObjectDestroyed { kind, center });
        state.award(kind.points());
        log::debug!(
            "Destroyed {} for {} points (score {})",
            kind.as_str(),
            kind.points(),
            state.score
        );
    }

    let mut flags = dead_shots.into_iter();
    state.projectiles.retain(|_| !flags.next().unwrap_or(false));
    let mut flags = dead_objects.into_iter();
    state.objects.retain(|_| !flags.next().unwrap_or(false));

    hits.len()
}

/// Emit a burst of `BURST_SIZE` particles at `center`
pub fn spawn_explosion(state: &mut GameState, center: Vec2) {
    for _ in 0..BURST_SIZE {
        let particle = random_particle(&mut state.rng, center);
        state.particles.push(particle);
    }
}

/// One burst particle with random velocity and a warm orange-red hue
pub fn random_particle(rng: &mut impl Rng, center: Vec2) -> Particle {
    let vel = Vec2::new(
        (rng.random::<f32>() - 0.5) * 2.0 * PARTICLE_MAX_SPEED,
        (rng.random::<f32>() - 0.5) * 2.0 * PARTICLE_MAX_SPEED,
    );
    Particle {
        pos: center,
        vel,
        life: PARTICLE_LIFE,
        max_life: PARTICLE_LIFE,
        alpha: 1.0,
        hue: PARTICLE_HUE_BASE + rng.random::<f32>() * PARTICLE_HUE_SPAN,
    }
}
