/// ViewerContext — owns the camera and per-frame input state for one
/// rendered scene.
///
/// The surrounding event loop forwards keyboard, cursor, and scroll
/// events here, calls `advance()` once per frame with the elapsed time,
/// then reads `view_matrix()` for rendering. Single-threaded by design:
/// one writer, one reader, both the caller's loop.

use bitflags::bitflags;
use glam::Mat4;
use winit::event::{ElementState, KeyEvent, MouseScrollDelta};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::{CursorTracker, KeyBindings};
use crate::camera::{FlyCamera, MoveDirection};
use crate::config::CameraConfig;

/// Trackpads report pixel deltas; one text line worth of pixels maps to
/// one wheel notch.
const PIXELS_PER_LINE: f64 = 16.0;

bitflags! {
    /// Movement directions currently held down.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct MoveKeys: u8 {
        /// Forward key held
        const FORWARD = 1 << 0;
        /// Backward key held
        const BACKWARD = 1 << 1;
        /// Strafe-left key held
        const LEFT = 1 << 2;
        /// Strafe-right key held
        const RIGHT = 1 << 3;
    }
}

impl From<MoveDirection> for MoveKeys {
    fn from(direction: MoveDirection) -> Self {
        match direction {
            MoveDirection::Forward => MoveKeys::FORWARD,
            MoveDirection::Backward => MoveKeys::BACKWARD,
            MoveDirection::Left => MoveKeys::LEFT,
            MoveDirection::Right => MoveKeys::RIGHT,
        }
    }
}

/// Per-scene application context: camera, cursor tracking, key state.
#[derive(Debug, Clone)]
pub struct ViewerContext {
    camera: FlyCamera,
    cursor: CursorTracker,
    bindings: KeyBindings,
    held: MoveKeys,
    normalize_combined_input: bool,
}

impl Default for ViewerContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewerContext {
    /// Create a context with default camera settings and WASD bindings.
    pub fn new() -> Self {
        Self::with_config(&CameraConfig::default())
    }

    /// Create a context with camera settings taken from a config.
    pub fn with_config(config: &CameraConfig) -> Self {
        Self {
            camera: FlyCamera::from_config(config),
            cursor: CursorTracker::new(),
            bindings: KeyBindings::default(),
            held: MoveKeys::empty(),
            normalize_combined_input: config.normalize_combined_input,
        }
    }

    /// The owned camera.
    pub fn camera(&self) -> &FlyCamera {
        &self.camera
    }

    /// Mutable access to the owned camera.
    pub fn camera_mut(&mut self) -> &mut FlyCamera {
        &mut self.camera
    }

    /// Mutable access to the key bindings.
    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    /// Movement directions currently held down.
    pub fn held(&self) -> MoveKeys {
        self.held
    }

    /// Record a key transition. Unbound keys are a no-op.
    pub fn apply_key(&mut self, key: KeyCode, pressed: bool) {
        if let Some(direction) = self.bindings.lookup(key) {
            self.held.set(MoveKeys::from(direction), pressed);
        }
    }

    /// Forward a winit keyboard event.
    ///
    /// OS key repeats are ignored; only press/release transitions matter
    /// for held state.
    pub fn handle_key_event(&mut self, event: &KeyEvent) {
        if event.repeat {
            return;
        }
        if let PhysicalKey::Code(code) = event.physical_key {
            self.apply_key(code, event.state == ElementState::Pressed);
        }
    }

    /// Forward an absolute cursor position.
    ///
    /// The first sample after construction or [`reset_cursor`] only
    /// seeds the tracker; later samples rotate the camera.
    ///
    /// [`reset_cursor`]: Self::reset_cursor
    pub fn handle_cursor_moved(&mut self, x: f64, y: f64) {
        if let Some((dx, dy)) = self.cursor.sample(x, y) {
            self.camera.process_mouse(dx, dy);
        }
    }

    /// Forget the tracked cursor position (focus loss, cursor re-grab).
    pub fn reset_cursor(&mut self) {
        self.cursor.reset();
    }

    /// Forward a winit scroll event to the camera's zoom.
    pub fn handle_scroll(&mut self, delta: &MouseScrollDelta) {
        let offset = match delta {
            MouseScrollDelta::LineDelta(_, y) => *y,
            MouseScrollDelta::PixelDelta(position) => (position.y / PIXELS_PER_LINE) as f32,
        };
        self.camera.process_scroll(offset);
    }

    /// Apply the held movement keys for one frame.
    ///
    /// `delta_time` is the elapsed time in seconds since the previous
    /// frame. With no keys held this does nothing.
    pub fn advance(&mut self, delta_time: f32) {
        let directions = self.held_directions();
        if directions.is_empty() {
            return;
        }
        self.camera
            .process_keyboard_combined(&directions, delta_time, self.normalize_combined_input);
    }

    /// View matrix of the owned camera.
    pub fn view_matrix(&self) -> Mat4 {
        self.camera.view_matrix()
    }

    fn held_directions(&self) -> Vec<MoveDirection> {
        const ORDER: [(MoveKeys, MoveDirection); 4] = [
            (MoveKeys::FORWARD, MoveDirection::Forward),
            (MoveKeys::BACKWARD, MoveDirection::Backward),
            (MoveKeys::LEFT, MoveDirection::Left),
            (MoveKeys::RIGHT, MoveDirection::Right),
        ];

        ORDER
            .iter()
            .filter(|(flag, _)| self.held.contains(*flag))
            .map(|(_, direction)| *direction)
            .collect()
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
