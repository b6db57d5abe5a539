//! Input module — explicit per-scene input state.
//!
//! The tutorial programs this crate replaces kept the camera and the
//! last mouse position as process-wide globals read by callbacks. Here
//! everything lives in an explicit [`ViewerContext`] the caller owns and
//! passes into its event dispatch, whatever shape that takes.

mod bindings;
mod context;
mod cursor;

pub use bindings::KeyBindings;
pub use context::{MoveKeys, ViewerContext};
pub use cursor::CursorTracker;
