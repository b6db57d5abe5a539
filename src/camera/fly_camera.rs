/// FlyCamera — free-fly viewer pose and zoom state.
///
/// Converts discrete input events (keyboard movement, mouse-look deltas,
/// scroll zoom) into an updated pose, and produces a view matrix on
/// demand. All angles are in degrees; yaw/pitch use the spherical
/// parameterization where yaw -90° / pitch 0° faces -Z.
///
/// Purely numeric state: single-threaded, mutated and read from the
/// caller's loop in the order poll-input → advance → view_matrix.

use glam::{Mat4, Vec3};

use crate::config::CameraConfig;

/// Pitch is clamped short of ±90° so the view never flips at the poles.
pub const PITCH_LIMIT: f32 = 89.0;

/// Narrowest usable vertical field of view, degrees.
pub const FOV_MIN: f32 = 1.0;

/// Widest usable vertical field of view, degrees. Anything beyond is
/// unusable fisheye distortion.
pub const FOV_MAX: f32 = 130.0;

/// Discrete movement selector for keyboard-driven displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    /// Along the viewing direction
    Forward,
    /// Against the viewing direction
    Backward,
    /// Strafe against the right basis vector
    Left,
    /// Strafe along the right basis vector
    Right,
}

/// Free-fly camera. One instance per rendered scene, owned by the caller.
#[derive(Debug, Clone)]
pub struct FlyCamera {
    position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    fov: f32,
    move_speed: f32,
    mouse_sens: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl FlyCamera {
    /// Create a camera at the origin looking down -Z with default
    /// movement speed, sensitivity, and a 45° field of view.
    pub fn new() -> Self {
        Self::from_config(&CameraConfig::default())
    }

    /// Create a camera with speed/sensitivity/fov taken from a config.
    ///
    /// The configured fov is clamped to [`FOV_MIN`, `FOV_MAX`] like any
    /// other fov mutation.
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            position: Vec3::ZERO,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up: Vec3::Y,
            yaw: -90.0,
            pitch: 0.0,
            fov: config.fov.clamp(FOV_MIN, FOV_MAX),
            move_speed: config.move_speed,
            mouse_sens: config.mouse_sens,
        }
    }

    // ===== GETTERS =====

    /// World-space eye location.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit forward-looking direction.
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Orthonormal up basis vector used for view construction.
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Orthonormal right basis vector used for strafing.
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Horizontal orientation angle, degrees. Accumulates without bound;
    /// only its trigonometric image is ever used.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Vertical orientation angle, degrees, always in [-89, 89].
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view, degrees, always in [1, 130].
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Linear units per second for keyboard movement.
    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    /// Degrees per raw input unit for mouse look.
    pub fn mouse_sens(&self) -> f32 {
        self.mouse_sens
    }

    /// Teleport the eye to a new world-space location.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    // ===== OPERATIONS =====

    /// View-space transform placing the eye at `position`, looking toward
    /// `position + front`, with `up` as the vertical reference.
    ///
    /// Pure function of current state; recompute every frame.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Displace the eye along the front/right basis by
    /// `move_speed * delta_time`.
    pub fn process_keyboard(&mut self, direction: MoveDirection, delta_time: f32) {
        let velocity = self.move_speed * delta_time;
        match direction {
            MoveDirection::Forward => self.position += self.front * velocity,
            MoveDirection::Backward => self.position -= self.front * velocity,
            MoveDirection::Left => self.position -= self.right * velocity,
            MoveDirection::Right => self.position += self.right * velocity,
        }
    }

    /// Apply every held movement direction for one frame.
    ///
    /// With `normalize` false this is exactly equivalent to one
    /// `process_keyboard` call per direction, so holding forward and a
    /// strafe key together exceeds `move_speed` — the classic tutorial
    /// behavior. With `normalize` true the combined direction is scaled
    /// back to unit length first.
    pub fn process_keyboard_combined(
        &mut self,
        directions: &[MoveDirection],
        delta_time: f32,
        normalize: bool,
    ) {
        let mut wish = Vec3::ZERO;
        for direction in directions {
            wish += match direction {
                MoveDirection::Forward => self.front,
                MoveDirection::Backward => -self.front,
                MoveDirection::Left => -self.right,
                MoveDirection::Right => self.right,
            };
        }
        if normalize {
            wish = wish.normalize_or_zero();
        }
        self.position += wish * self.move_speed * delta_time;
    }

    /// Zoom by a signed scroll delta: `fov -= offset`, clamped to
    /// [`FOV_MIN`, `FOV_MAX`].
    pub fn process_scroll(&mut self, offset: f32) {
        self.fov = (self.fov - offset).clamp(FOV_MIN, FOV_MAX);
    }

    /// Rotate by signed horizontal/vertical look deltas, scaled by
    /// `mouse_sens`. Pitch is clamped to ±[`PITCH_LIMIT`]; yaw is never
    /// wrapped. The front/right/up basis is rederived afterwards, so
    /// `front` is unit length on return.
    pub fn process_mouse(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.mouse_sens;
        self.pitch = (self.pitch + dy * self.mouse_sens).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_basis();
    }

    /// Rederive front, right, and up from yaw, pitch, and the fixed
    /// world up axis.
    fn update_basis(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch.to_radians().sin_cos();

        self.front = Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize();
        // Pitch stays short of ±90°, so front is never parallel to world_up
        // and the cross products below cannot degenerate.
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
#[path = "fly_camera_tests.rs"]
mod tests;
