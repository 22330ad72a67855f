//! Wire-shape note records for the request boundary

use crate::error::AnalysisError;
use crate::model::{Note, NoteSource, EXTRACTED_VELOCITY};
use serde::{Deserialize, Serialize};

/// A note as it appears in an accompaniment request
///
/// `pitch`, `start` and `duration` are required; a record missing any of
/// them fails deserialization. `velocity` defaults to the extraction
/// constant when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteRecord {
    pub pitch: i32,
    pub start: f32,
    pub duration: f32,
    #[serde(default)]
    pub velocity: Option<i32>,
    #[serde(default)]
    pub source: Option<NoteSource>,
}

impl NoteRecord {
    /// Validate the record and convert it to a domain note
    pub fn into_note(self) -> Result<Note, AnalysisError> {
        if !self.start.is_finite() || self.start < 0.0 {
            return Err(AnalysisError::MalformedNote(format!(
                "start must be a non-negative number, got {}",
                self.start
            )));
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(AnalysisError::MalformedNote(format!(
                "duration must be a non-negative number, got {}",
                self.duration
            )));
        }

        Ok(Note {
            pitch: self.pitch,
            start: self.start,
            duration: self.duration,
            velocity: self.velocity.unwrap_or(EXTRACTED_VELOCITY),
            source: self.source.unwrap_or(NoteSource::Extracted),
        })
    }
}

impl From<Note> for NoteRecord {
    fn from(note: Note) -> Self {
        Self {
            pitch: note.pitch,
            start: note.start,
            duration: note.duration,
            velocity: Some(note.velocity),
            source: Some(note.source),
        }
    }
}

/// Body of an accompaniment request: an ordered list of note records
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccompanimentRequest {
    pub notes: Vec<NoteRecord>,
}

/// Analysis response: the extracted note sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotesResponse {
    pub notes: Vec<Note>,
}

/// Accompaniment response: the synthesized note sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccompanimentResponse {
    #[serde(rename = "accompanimentNotes")]
    pub accompaniment_notes: Vec<Note>,
}
