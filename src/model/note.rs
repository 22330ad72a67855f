use serde::{Deserialize, Serialize};

/// Velocity assigned to notes extracted from audio
pub const EXTRACTED_VELOCITY: i32 = 80;

/// Velocity assigned to synthesized accompaniment notes
pub const ACCOMPANIMENT_VELOCITY: i32 = 70;

/// A single discrete musical note
///
/// Extracted notes carry a MIDI note number in `pitch`; accompaniment notes
/// carry a pitch-class-relative value (root in [0,11], third/fifth offset
/// above it).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Integer pitch (MIDI note number for extracted notes)
    pub pitch: i32,

    /// Offset from the start of the analyzed signal, in seconds
    pub start: f32,

    /// Length in seconds
    pub duration: f32,

    /// Loudness proxy - constant per producer, not derived from the signal
    pub velocity: i32,

    /// Provenance tag
    pub source: NoteSource,
}

/// Where a note came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteSource {
    /// Produced by pitch analysis of the input audio
    Extracted,

    /// Synthesized by the accompaniment generator
    Accompaniment,
}

impl Note {
    /// Create an extracted note with the standard extraction velocity
    pub fn extracted(pitch: i32, start: f32, duration: f32) -> Self {
        Self {
            pitch,
            start,
            duration,
            velocity: EXTRACTED_VELOCITY,
            source: NoteSource::Extracted,
        }
    }

    /// Create an accompaniment note with the standard accompaniment velocity
    pub fn accompaniment(pitch: i32, start: f32, duration: f32) -> Self {
        Self {
            pitch,
            start,
            duration,
            velocity: ACCOMPANIMENT_VELOCITY,
            source: NoteSource::Accompaniment,
        }
    }

    /// End time of the note in seconds
    pub fn end(&self) -> f32 {
        self.start + self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_tag_serialization() {
        let note = Note::extracted(60, 0.0, 0.5);
        let json = serde_json::to_string(&note).unwrap();
        assert!(json.contains("\"source\":\"extracted\""));

        let note = Note::accompaniment(0, 0.0, 0.5);
        let json = serde_json::to_string(&note).unwrap();
        assert!(json.contains("\"source\":\"accompaniment\""));
    }

    #[test]
    fn test_note_roundtrip() {
        let note = Note::extracted(72, 1.5, 0.25);
        let json = serde_json::to_string(&note).unwrap();
        let back: Note = serde_json::from_str(&json).unwrap();
        assert_eq!(back, note);
        assert_eq!(back.velocity, EXTRACTED_VELOCITY);
    }

    #[test]
    fn test_end_time() {
        let note = Note::extracted(60, 1.0, 0.5);
        assert!((note.end() - 1.5).abs() < 1e-6);
    }
}
