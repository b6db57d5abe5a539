/// KeyBindings — physical key to movement direction mapping.
///
/// Defaults to WASD. Keys are matched by physical position
/// (`winit::keyboard::KeyCode`), so the layout works the same on
/// non-QWERTY keyboards.

use rustc_hash::FxHashMap;
use winit::keyboard::KeyCode;

use crate::camera::MoveDirection;

/// Keyboard bindings for camera movement.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: FxHashMap<KeyCode, MoveDirection>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut map = FxHashMap::default();
        map.insert(KeyCode::KeyW, MoveDirection::Forward);
        map.insert(KeyCode::KeyS, MoveDirection::Backward);
        map.insert(KeyCode::KeyA, MoveDirection::Left);
        map.insert(KeyCode::KeyD, MoveDirection::Right);
        Self { map }
    }
}

impl KeyBindings {
    /// Movement direction bound to a key, if any.
    pub fn lookup(&self, key: KeyCode) -> Option<MoveDirection> {
        self.map.get(&key).copied()
    }

    /// Bind a key to a movement direction, replacing any previous binding
    /// for that key.
    pub fn bind(&mut self, key: KeyCode, direction: MoveDirection) {
        self.map.insert(key, direction);
    }

    /// Remove a binding, returning the direction it mapped to.
    pub fn unbind(&mut self, key: KeyCode) -> Option<MoveDirection> {
        self.map.remove(&key)
    }
}

#[cfg(test)]
#[path = "bindings_tests.rs"]
mod tests;
