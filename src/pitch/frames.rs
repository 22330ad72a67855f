//! Hop-aligned frame source over a decoded sample buffer

use super::traits::{PitchFrame, PitchTracker};
use super::HOP_SIZE;

/// One-shot iterator producing a pitch frame per hop of a mono sample buffer
///
/// Drives the injected [`PitchTracker`] over consecutive windows spaced
/// `hop_size` samples apart. Traversal is strictly ordered and cannot be
/// restarted; build a fresh source to analyze the signal again.
pub struct FrameSource<T: PitchTracker> {
    samples: Vec<f32>,
    tracker: T,
    hop_size: usize,
    position: usize,
    hop_duration: f32,
}

impl<T: PitchTracker> FrameSource<T> {
    /// Create a frame source over the given mono samples
    pub fn new(samples: Vec<f32>, sample_rate: u32, tracker: T) -> Self {
        Self::with_hop(samples, sample_rate, tracker, HOP_SIZE)
    }

    /// Create a frame source with a custom hop size
    pub fn with_hop(samples: Vec<f32>, sample_rate: u32, tracker: T, hop_size: usize) -> Self {
        let hop_duration = hop_size as f32 / sample_rate as f32;
        Self {
            samples,
            tracker,
            hop_size,
            position: 0,
            hop_duration,
        }
    }

    /// Seconds of audio covered by one hop
    pub fn hop_duration(&self) -> f32 {
        self.hop_duration
    }
}

impl<T: PitchTracker> Iterator for FrameSource<T> {
    type Item = PitchFrame;

    fn next(&mut self) -> Option<PitchFrame> {
        let window_size = self.tracker.window_size();
        let end = self.position.checked_add(window_size)?;
        if end > self.samples.len() {
            return None;
        }

        let window = &self.samples[self.position..end];
        let frame = self.tracker.estimate(window);
        self.position += self.hop_size;
        Some(frame)
    }
}
