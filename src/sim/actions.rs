//! Player actions: turret movement and shooting
//!
//! Sampled on the input timer, independently of the render/update tick.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GameState, Projectile};

/// Held-intent snapshot for one input sample
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurretInput {
    pub up: bool,
    pub down: bool,
    pub shoot: bool,
}

/// Fire one projectile from the turret muzzle
///
/// Returns false (and does nothing) when the game is not running.
pub fn shoot(state: &mut GameState) -> bool {
    if !state.is_running() {
        return false;
    }
    let muzzle = state.turret.muzzle();
    state.projectiles.push(Projectile::new(muzzle));
    state.events.push(GameEvent::Shot);
    true
}

/// Move the turret one step for the held directions
///
/// Position stays within [0, field height - turret height]. Returns true if
/// a move was applied. The first move of a run emits `FirstMove` once.
pub fn move_turret(state: &mut GameState, up: bool, down: bool) -> bool {
    if !state.is_running() {
        return false;
    }

    let floor = (state.field.y - state.turret.size.y).max(0.0);
    let turret = &mut state.turret;
    let mut moved = false;

    if up && turret.pos.y > 0.0 {
        turret.pos.y = (turret.pos.y - turret.speed).max(0.0);
        moved = true;
    }
    if down && turret.pos.y < floor {
        turret.pos.y = (turret.pos.y + turret.speed).min(floor);
        moved = true;
    }

    if moved && !state.player_has_moved {
        state.player_has_moved = true;
        state.events.push(GameEvent::FirstMove);
        log::info!("Player moved, hiding controls");
    }

    moved
}

/// Apply one input sample: movement first, then shooting
pub fn apply_input(state: &mut GameState, input: &TurretInput) {
    if !state.is_running() {
        return;
    }
    move_turret(state, input.up, input.down);
    if input.shoot {
        shoot(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_shoot_spawns_at_muzzle() {
        let mut state = GameState::new(1, 800.0, 600.0);
        assert!(shoot(&mut state));
        assert_eq!(state.projectiles.len(), 1);
        let shot = &state.projectiles[0];
        assert_eq!(shot.pos, Vec2::new(130.0, 313.0));
        assert_eq!(shot.size, Vec2::new(8.0, 4.0));
        assert_eq!(shot.speed, 8.0);
        assert_eq!(state.events, vec![GameEvent::Shot]);
    }

    #[test]
    fn test_shoot_ignored_when_over() {
        let mut state = GameState::new(1, 800.0, 600.0);
        state.game_over();
        state.drain_events();
        assert!(!shoot(&mut state));
        assert!(state.projectiles.is_empty());
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_move_up_and_down() {
        let mut state = GameState::new(1, 800.0, 600.0);
        assert!(move_turret(&mut state, true, false));
        assert_eq!(state.turret.pos.y, 295.0);
        assert!(move_turret(&mut state, false, true));
        assert_eq!(state.turret.pos.y, 300.0);
    }

    #[test]
    fn test_move_clamps_to_field() {
        let mut state = GameState::new(1, 800.0, 600.0);
        state.turret.pos.y = 3.0;
        assert!(move_turret(&mut state, true, false));
        assert_eq!(state.turret.pos.y, 0.0);
        assert!(!move_turret(&mut state, true, false));

        state.turret.pos.y = 538.0;
        assert!(move_turret(&mut state, false, true));
        assert_eq!(state.turret.pos.y, 540.0);
        assert!(!move_turret(&mut state, false, true));
    }

    #[test]
    fn test_first_move_fires_once() {
        let mut state = GameState::new(1, 800.0, 600.0);
        assert!(!move_turret(&mut state, false, false));
        assert!(!state.player_has_moved);

        move_turret(&mut state, true, false);
        move_turret(&mut state, true, false);
        move_turret(&mut state, false, true);
        assert!(state.player_has_moved);
        let first_moves = state
            .drain_events()
            .into_iter()
            .filter(|e| *e == GameEvent::FirstMove)
            .count();
        assert_eq!(first_moves, 1);
    }

    #[test]
    fn test_apply_input_moves_then_shoots() {
        let mut state = GameState::new(1, 800.0, 600.0);
        let input = TurretInput {
            up: true,
            down: false,
            shoot: true,
        };
        apply_input(&mut state, &input);
        // Muzzle follows the turret's new position
        assert_eq!(state.projectiles[0].pos.y, 308.0);
        assert_eq!(state.events, vec![GameEvent::FirstMove, GameEvent::Shot]);
    }
}
