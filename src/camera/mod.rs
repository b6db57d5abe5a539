//! Camera module — free-fly camera and projection parameters.
//!
//! The camera owns the viewer pose (position, orientation, field of view)
//! and nothing else: no GPU handles, no window state. It is owned and
//! driven by the caller's render/input loop, once per frame.

mod fly_camera;
mod projection;

pub use fly_camera::{FlyCamera, MoveDirection, FOV_MAX, FOV_MIN, PITCH_LIMIT};
pub use projection::Projection;
