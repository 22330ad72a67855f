//! Note segmentation
//!
//! Turns a per-frame pitch/confidence stream into a run-length-encoded note
//! sequence. A run is a maximal stretch of consecutive voiced frames sharing
//! the same quantized pitch; each run becomes one note.

use crate::error::AnalysisError;
use crate::model::Note;
use crate::pitch::PitchFrame;

/// Thresholds controlling which frames count as voiced
#[derive(Debug, Clone)]
pub struct SegmenterConfig {
    /// Minimum confidence (exclusive) for a frame to be voiced
    pub confidence_threshold: f32,

    /// Lowest admissible quantized pitch (inclusive)
    pub min_pitch: i32,

    /// Highest admissible quantized pitch (inclusive)
    pub max_pitch: i32,
}

impl SegmenterConfig {
    pub fn new() -> Self {
        Self {
            confidence_threshold: 0.8,
            min_pitch: 36,
            max_pitch: 90,
        }
    }

    /// Set a custom confidence threshold
    pub fn with_confidence_threshold(mut self, threshold: f32) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    /// Set a custom admissible pitch range
    pub fn with_pitch_range(mut self, min: i32, max: i32) -> Self {
        self.min_pitch = min;
        self.max_pitch = max;
        self
    }

    /// Whether a frame passes the voicing test
    ///
    /// Non-finite pitch estimates are treated as unvoiced.
    fn is_voiced(&self, frame: &PitchFrame) -> bool {
        if !frame.pitch.is_finite() {
            return false;
        }
        let quantized = quantize(frame.pitch);
        frame.confidence > self.confidence_threshold
            && quantized >= self.min_pitch
            && quantized <= self.max_pitch
    }
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Round a raw pitch estimate to the nearest integer note value
fn quantize(pitch: f32) -> i32 {
    pitch.round() as i32
}

/// Segmentation state: either between runs or inside one
enum RunState {
    Idle,
    InRun { pitch: i32, start: f32 },
}

/// Segment a pitch-frame stream into notes
///
/// Single forward pass with O(1) state. The clock advances by
/// `hop_duration` after every frame, voiced or not. Unvoiced frames do not
/// close an open run; a brief unvoiced gap inside a stable pitch run is
/// skipped and the run continues across it.
pub fn segment_notes(
    frames: impl IntoIterator<Item = PitchFrame>,
    hop_duration: f32,
    config: &SegmenterConfig,
) -> Result<Vec<Note>, AnalysisError> {
    if !hop_duration.is_finite() || hop_duration <= 0.0 {
        return Err(AnalysisError::Invariant(format!(
            "hop duration must be positive, got {hop_duration}"
        )));
    }

    let mut notes = Vec::new();
    let mut state = RunState::Idle;
    let mut elapsed = 0.0f32;

    for frame in frames {
        if config.is_voiced(&frame) {
            let pitch = quantize(frame.pitch);
            state = match state {
                RunState::Idle => RunState::InRun {
                    pitch,
                    start: elapsed,
                },
                RunState::InRun {
                    pitch: current,
                    start,
                } if current != pitch => {
                    notes.push(Note::extracted(current, start, elapsed - start));
                    RunState::InRun {
                        pitch,
                        start: elapsed,
                    }
                }
                run => run,
            };
        }
        elapsed += hop_duration;
    }

    if let RunState::InRun { pitch, start } = state {
        notes.push(Note::extracted(pitch, start, elapsed - start));
    }

    log::debug!("Segmented {} notes from stream", notes.len());
    Ok(notes)
}
