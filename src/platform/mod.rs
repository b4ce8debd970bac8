//! Platform abstraction layer
//!
//! Tracks held keys from keydown/keyup events and turns them into turret
//! intents for the input-sampling timer.

use std::collections::HashSet;

use crate::sim::TurretInput;

/// Which intent a key code drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Up,
    Down,
    Shoot,
}

/// Map a `KeyboardEvent.code` to an intent (arrows, WASD, space)
pub fn intent_for(code: &str) -> Option<Intent> {
    match code {
        "ArrowUp" | "KeyW" => Some(Intent::Up),
        "ArrowDown" | "KeyS" => Some(Intent::Down),
        "Space" => Some(Intent::Shoot),
        _ => None,
    }
}

/// Set of currently held key codes
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    down: HashSet<String>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, code: &str) {
        self.down.insert(code.to_owned());
    }

    pub fn release(&mut self, code: &str) {
        self.down.remove(code);
    }

    /// Forget everything (e.g. window lost focus)
    pub fn clear(&mut self) {
        self.down.clear();
    }

    pub fn is_held(&self, code: &str) -> bool {
        self.down.contains(code)
    }

    /// Current intents from all held keys
    pub fn sample(&self) -> TurretInput {
        let mut input = TurretInput::default();
        for intent in self.down.iter().filter_map(|code| intent_for(code)) {
            match intent {
                Intent::Up => input.up = true,
                Intent::Down => input.down = true,
                Intent::Shoot => input.shoot = true,
            }
        }
        input
    }
}
