//! Real pitch tracker backed by the YIN detector
//!
//! Wraps `pitch_detection`'s YIN implementation and converts its frequency
//! output to a MIDI-scale semitone value.

use super::traits::{PitchFrame, PitchTracker};
use super::WINDOW_SIZE;
use pitch_detection::detector::yin::YINDetector;
use pitch_detection::detector::PitchDetector;

/// Minimum mean signal power below which a window is reported as silent
const POWER_THRESHOLD: f32 = 0.05;

/// YIN-based pitch tracker
pub struct YinTracker {
    detector: YINDetector<f32>,
    sample_rate: u32,
    window_size: usize,
}

impl YinTracker {
    /// Create a tracker for the given sample rate with the default window
    pub fn new(sample_rate: u32) -> Self {
        Self::with_window(sample_rate, WINDOW_SIZE)
    }

    /// Create a tracker with a custom window size
    pub fn with_window(sample_rate: u32, window_size: usize) -> Self {
        let detector = YINDetector::new(window_size, window_size / 2);
        Self {
            detector,
            sample_rate,
            window_size,
        }
    }
}

impl PitchTracker for YinTracker {
    fn window_size(&self) -> usize {
        self.window_size
    }

    fn estimate(&mut self, window: &[f32]) -> PitchFrame {
        let result = self.detector.get_pitch(
            window,
            self.sample_rate as usize,
            POWER_THRESHOLD,
            0.0,
        );

        match result {
            Some(pitch) if pitch.frequency > 0.0 => PitchFrame {
                pitch: frequency_to_midi(pitch.frequency),
                confidence: pitch.clarity.clamp(0.0, 1.0),
            },
            _ => PitchFrame::silent(),
        }
    }
}

/// Convert a frequency in Hz to a continuous MIDI note value (A4 = 69)
fn frequency_to_midi(frequency: f32) -> f32 {
    69.0 + 12.0 * (frequency / 440.0).log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_to_midi_reference_points() {
        assert!((frequency_to_midi(440.0) - 69.0).abs() < 1e-4);
        assert!((frequency_to_midi(261.63) - 60.0).abs() < 0.01);
        assert!((frequency_to_midi(880.0) - 81.0).abs() < 1e-4);
    }

    #[test]
    fn test_silent_window_has_no_confidence() {
        let mut tracker = YinTracker::new(44100);
        let window = vec![0.0f32; tracker.window_size()];
        let frame = tracker.estimate(&window);
        assert_eq!(frame.confidence, 0.0);
    }

    #[test]
    fn test_sine_window_detects_a4() {
        let sample_rate = 44100u32;
        let mut tracker = YinTracker::new(sample_rate);
        let window: Vec<f32> = (0..tracker.window_size())
            .map(|i| {
                let t = i as f32 / sample_rate as f32;
                0.5 * (2.0 * std::f32::consts::PI * 440.0 * t).sin()
            })
            .collect();

        let frame = tracker.estimate(&window);
        assert!(frame.confidence > 0.8, "confidence was {}", frame.confidence);
        assert!(
            (frame.pitch - 69.0).abs() < 0.5,
            "pitch was {}",
            frame.pitch
        );
    }
}
