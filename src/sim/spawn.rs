//! Falling object spawner
//!
//! At most one object per tick, with probability `GameState::spawn_rate`.

use glam::Vec2;
use rand::Rng;

use super::state::{FallingObject, GameState, ObjectKind};
use crate::consts::*;

/// Roll the spawner once for this tick
///
/// Returns true if an object was created. Nothing is drawn from the RNG when
/// the store is already full.
pub fn maybe_spawn(state: &mut GameState) -> bool {
    if state.objects.len() >= MAX_OBJECTS {
        return false;
    }
    if state.rng.random::<f32>() >= state.spawn_rate {
        return false;
    }
    spawn_object(state)
}

/// Spawn one object just past the right edge (respects the cap)
pub fn spawn_object(state: &mut GameState) -> bool {
    if state.objects.len() >= MAX_OBJECTS {
        return false;
    }
    let object = random_object(&mut state.rng, state.field);
    log::trace!(
        "Spawned {} at y={:.0}, total objects: {}",
        object.kind.as_str(),
        object.pos.y,
        state.objects.len() + 1
    );
    state.objects.push(object);
    true
}

/// Build a randomized object entering from the right side of `field`
pub fn random_object(rng: &mut impl Rng, field: Vec2) -> FallingObject {
    let kind = ObjectKind::ALL[rng.random_range(0..ObjectKind::ALL.len())];
    // Scaled unit draws keep this total even on tiny fields
    let y = rng.random::<f32>() * (field.y - SPAWN_MARGIN).max(0.0);
    let w = OBJECT_MIN_SIZE + rng.random::<f32>() * (OBJECT_MAX_SIZE - OBJECT_MIN_SIZE);
    let h = OBJECT_MIN_SIZE + rng.random::<f32>() * (OBJECT_MAX_SIZE - OBJECT_MIN_SIZE);
    let speed = OBJECT_MIN_SPEED + rng.random::<f32>() * (OBJECT_MAX_SPEED - OBJECT_MIN_SPEED);
    let rotation_speed = (rng.random::<f32>() - 0.5) * 2.0 * OBJECT_MAX_SPIN;

    FallingObject {
        pos: Vec2::new(field.x + SPAWN_MARGIN, y),
        size: Vec2::new(w, h),
        speed,
        kind,
        rotation: 0.0,
        rotation_speed,
    }
}
