//! Pitch tracker trait definition and frame data structure

/// One pitch estimate for a fixed-size hop of audio
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchFrame {
    /// Estimated pitch on a MIDI-like semitone scale (may be non-finite
    /// when the engine produced no usable estimate)
    pub pitch: f32,

    /// Engine confidence in [0,1] - higher is more reliable
    pub confidence: f32,
}

impl PitchFrame {
    /// A frame carrying no usable pitch estimate
    pub fn silent() -> Self {
        Self {
            pitch: 0.0,
            confidence: 0.0,
        }
    }
}

/// Pitch tracking engine trait - allows swapping between the real YIN
/// backend and scripted implementations in tests
pub trait PitchTracker {
    /// Number of samples the engine needs per estimate
    fn window_size(&self) -> usize;

    /// Estimate pitch and confidence for one window of mono samples
    ///
    /// The window is exactly `window_size()` samples long.
    fn estimate(&mut self, window: &[f32]) -> PitchFrame;
}
