//! Analysis service boundary
//!
//! Request-scoped orchestration of decode, pitch tracking, segmentation and
//! accompaniment. This is the surface a transport layer calls: it accepts
//! raw bytes or a file path and returns serializable note sequences. No
//! state survives a call.

mod records;

pub use records::{AccompanimentRequest, AccompanimentResponse, NoteRecord, NotesResponse};

use crate::decode::decode_to_mono;
use crate::error::AnalysisError;
use crate::harmony::generate_accompaniment;
use crate::model::Note;
use crate::pitch::{FrameSource, YinTracker};
use crate::segment::{segment_notes, SegmenterConfig};
use std::io::Write;
use std::path::Path;

/// Stateless analysis service
pub struct AnalysisService {
    config: SegmenterConfig,
}

impl AnalysisService {
    /// Create a service with default segmenter thresholds
    pub fn new() -> Self {
        Self {
            config: SegmenterConfig::new(),
        }
    }

    /// Create a service with custom segmenter thresholds
    pub fn with_config(config: SegmenterConfig) -> Self {
        Self { config }
    }

    /// Extract notes from an audio file on disk
    pub fn analyze_file(&self, path: &Path) -> Result<Vec<Note>, AnalysisError> {
        let audio = decode_to_mono(path)?;
        log::info!(
            "Analyzing {:.1}s of audio at {}Hz",
            audio.duration_secs(),
            audio.sample_rate
        );

        let tracker = YinTracker::new(audio.sample_rate);
        let source = FrameSource::new(audio.samples, audio.sample_rate, tracker);
        let hop_duration = source.hop_duration();

        let notes = segment_notes(source, hop_duration, &self.config)?;
        log::info!("Extracted {} notes", notes.len());
        Ok(notes)
    }

    /// Extract notes from raw uploaded audio bytes
    ///
    /// The bytes are staged in a temporary file which is deleted on every
    /// exit path, including decode failures.
    pub fn analyze_bytes(&self, bytes: &[u8]) -> Result<Vec<Note>, AnalysisError> {
        let mut staged = tempfile::NamedTempFile::new()?;
        staged.write_all(bytes)?;
        staged.flush()?;
        self.analyze_file(staged.path())
    }

    /// Generate accompaniment for a batch of note records
    ///
    /// The whole batch is validated before any output is produced; one
    /// malformed record rejects the entire request.
    pub fn accompaniment_for(
        &self,
        records: Vec<NoteRecord>,
    ) -> Result<Vec<Note>, AnalysisError> {
        let notes = records
            .into_iter()
            .map(NoteRecord::into_note)
            .collect::<Result<Vec<Note>, AnalysisError>>()?;

        Ok(generate_accompaniment(&notes))
    }
}

impl Default for AnalysisService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NoteSource;

    #[test]
    fn test_undecodable_bytes_are_source_unavailable() {
        let service = AnalysisService::new();
        let result = service.analyze_bytes(b"definitely not audio");
        assert!(matches!(result, Err(AnalysisError::SourceUnavailable(_))));
    }

    #[test]
    fn test_accompaniment_for_valid_batch() {
        let service = AnalysisService::new();
        let records = vec![NoteRecord {
            pitch: 60,
            start: 0.0,
            duration: 0.5,
            velocity: None,
            source: None,
        }];

        let accomp = service.accompaniment_for(records).unwrap();
        assert_eq!(accomp.len(), 3);
        assert_eq!(accomp[0].pitch, 0);
        assert_eq!(accomp[1].pitch, 4);
        assert_eq!(accomp[2].pitch, 7);
        assert!(accomp.iter().all(|n| n.source == NoteSource::Accompaniment));
    }

    #[test]
    fn test_malformed_record_rejects_whole_batch() {
        let service = AnalysisService::new();
        let records = vec![
            NoteRecord {
                pitch: 60,
                start: 0.0,
                duration: 0.5,
                velocity: None,
                source: None,
            },
            NoteRecord {
                pitch: 64,
                start: 0.5,
                duration: f32::NAN,
                velocity: None,
                source: None,
            },
        ];

        let result = service.accompaniment_for(records);
        assert!(matches!(result, Err(AnalysisError::MalformedNote(_))));
    }

    #[test]
    fn test_empty_batch_is_valid() {
        let service = AnalysisService::new();
        let accomp = service.accompaniment_for(Vec::new()).unwrap();
        assert!(accomp.is_empty());
    }
}
