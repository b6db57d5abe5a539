/// CursorTracker — turns absolute cursor samples into look deltas.
///
/// Windowing layers report absolute cursor positions; mouse look wants
/// per-frame deltas. The first sample after construction (or after
/// `reset()`) has nothing to diff against and produces no delta, which
/// absorbs the large discontinuity when the cursor is first captured.

/// Last-known absolute cursor position.
#[derive(Debug, Clone, Default)]
pub struct CursorTracker {
    last: Option<(f64, f64)>,
}

impl CursorTracker {
    /// Create a tracker with no recorded position.
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Record an absolute sample and return the delta since the previous
    /// one, or `None` for the first sample.
    ///
    /// The vertical delta is flipped so that moving the cursor up is
    /// positive (screen coordinates grow downward).
    pub fn sample(&mut self, x: f64, y: f64) -> Option<(f32, f32)> {
        let delta = self
            .last
            .map(|(last_x, last_y)| ((x - last_x) as f32, (last_y - y) as f32));
        self.last = Some((x, y));
        delta
    }

    /// Forget the recorded position. Call on focus loss or cursor
    /// re-grab so the next sample does not produce a huge jump.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
#[path = "cursor_tests.rs"]
mod tests;
