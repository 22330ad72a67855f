//! Scripted pitch tracker for tests and offline use
//!
//! Replays a pre-programmed list of frames, ignoring the audio content.
//! This keeps segmenter tests free of any DSP backend.

use super::traits::{PitchFrame, PitchTracker};
use super::WINDOW_SIZE;

/// Pitch tracker that replays a fixed frame script
pub struct ScriptedTracker {
    frames: Vec<PitchFrame>,
    position: usize,
    window_size: usize,
}

impl ScriptedTracker {
    /// Create a tracker replaying the given frames in order
    ///
    /// Once the script is exhausted, silent frames are returned.
    pub fn new(frames: Vec<PitchFrame>) -> Self {
        Self {
            frames,
            position: 0,
            window_size: WINDOW_SIZE,
        }
    }
}

impl PitchTracker for ScriptedTracker {
    fn window_size(&self) -> usize {
        self.window_size
    }

    fn estimate(&mut self, _window: &[f32]) -> PitchFrame {
        let frame = self
            .frames
            .get(self.position)
            .copied()
            .unwrap_or_else(PitchFrame::silent);
        self.position += 1;
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_script_then_silence() {
        let mut tracker = ScriptedTracker::new(vec![PitchFrame {
            pitch: 60.0,
            confidence: 0.9,
        }]);

        let window = vec![0.0f32; tracker.window_size()];
        let first = tracker.estimate(&window);
        assert_eq!(first.pitch, 60.0);

        let second = tracker.estimate(&window);
        assert_eq!(second.confidence, 0.0);
    }
}
