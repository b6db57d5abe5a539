//! Shader module — GLSL source loading and driver diagnostics.
//!
//! The GPU side (shader objects, programs, uniforms) belongs to the
//! caller's graphics binding. This module covers the two pieces around
//! it: reading stage sources from disk as an explicit result, and
//! representing the driver's compile/link verdicts as structured values
//! instead of side-effecting console prints.

mod diagnostics;
mod source;

pub use diagnostics::{CompileOutcome, LinkOutcome};
pub use source::{ShaderSource, ShaderStage};
