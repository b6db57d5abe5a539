/*!
# Flycam 3D

Free-fly camera core for tutorial-style 3D renderers.

This crate owns the viewer pose (position, orientation, field of view) and
converts discrete input events — held movement keys, mouse-look deltas,
scroll zoom — into an updated pose, producing a view matrix on demand.
Window/context creation, the event loop, GPU shader compilation, and
vertex/texture upload stay with the caller's graphics binding.

## Architecture

- **FlyCamera**: viewer pose and field of view, view-matrix construction
- **Projection**: aspect/clip-plane parameters turning the camera fov into a projection matrix
- **ViewerContext**: owns the camera and per-frame input state, consumes winit events
- **CameraConfig**: TOML-loadable movement/sensitivity/fov settings
- **ShaderSource / CompileOutcome / LinkOutcome**: file-based GLSL loading and structured driver diagnostics

The caller drives everything from its render/input loop: forward events to
the `ViewerContext`, call `advance()` once per frame with the elapsed time,
then read the view matrix for rendering.
*/

// Internal modules
mod error;
pub mod camera;
pub mod config;
pub mod input;
pub mod log;
pub mod shader;

// Main flycam3d namespace module
pub mod flycam3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Camera and projection
    pub use crate::camera::{FlyCamera, MoveDirection, Projection, FOV_MAX, FOV_MIN, PITCH_LIMIT};

    // Configuration
    pub use crate::config::CameraConfig;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
        // Note: flycam_* macros are exported at the crate root by #[macro_export]
    }

    // Input sub-module with the event-facing types
    pub mod input {
        pub use crate::input::*;
    }

    // Shader sub-module
    pub mod shader {
        pub use crate::shader::*;
    }
}

// Re-export math library at crate root
pub use glam;
