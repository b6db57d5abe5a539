/// Projection — aspect ratio and clip planes for perspective projection.
///
/// The camera only owns the field of view; aspect and near/far belong to
/// the surface being rendered to. This type holds the surface half and
/// composes the two into a projection matrix.

use glam::Mat4;

/// Perspective projection parameters tied to the render surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    aspect: f32,
    znear: f32,
    zfar: f32,
}

impl Projection {
    /// Create projection parameters for a surface of the given pixel size.
    pub fn new(width: u32, height: u32, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: aspect_ratio(width, height),
            znear,
            zfar,
        }
    }

    /// Update the aspect ratio after a framebuffer resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = aspect_ratio(width, height);
    }

    /// Width / height ratio currently in use.
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Near clip plane distance.
    pub fn znear(&self) -> f32 {
        self.znear
    }

    /// Far clip plane distance.
    pub fn zfar(&self) -> f32 {
        self.zfar
    }

    /// Perspective matrix for a camera's vertical field of view (degrees).
    pub fn matrix(&self, fov_degrees: f32) -> Mat4 {
        Mat4::perspective_rh(fov_degrees.to_radians(), self.aspect, self.znear, self.zfar)
    }
}

/// Minimized windows report zero-sized framebuffers; clamp so the aspect
/// stays finite.
fn aspect_ratio(width: u32, height: u32) -> f32 {
    width.max(1) as f32 / height.max(1) as f32
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
