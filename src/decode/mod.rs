//! Audio decoding using symphonia
//!
//! Decodes an uploaded audio file to mono f32 samples for the pitch layer.
//! All decode failures surface as [`AnalysisError::SourceUnavailable`]
//! before any analysis runs.

use crate::error::AnalysisError;
use std::path::Path;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Decoded audio ready for pitch analysis
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// Mono samples in [-1, 1]
    pub samples: Vec<f32>,

    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl DecodedAudio {
    /// Total signal length in seconds
    pub fn duration_secs(&self) -> f32 {
        self.samples.len() as f32 / self.sample_rate as f32
    }
}

/// Decode an audio file to mono f32 samples
pub fn decode_to_mono(path: &Path) -> Result<DecodedAudio, AnalysisError> {
    log::debug!("Decoding audio: {:?}", path);

    let file = std::fs::File::open(path)
        .map_err(|e| AnalysisError::SourceUnavailable(format!("failed to open {path:?}: {e}")))?;
    let mss = MediaSourceStream::new(Box::new(file), Default::default());

    let mut hint = Hint::new();
    if let Some(ext) = path.extension() {
        hint.with_extension(ext.to_str().unwrap_or(""));
    }

    let format_opts = FormatOptions::default();
    let metadata_opts = MetadataOptions::default();

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &format_opts, &metadata_opts)
        .map_err(|e| AnalysisError::SourceUnavailable(format!("failed to probe format: {e}")))?;

    let mut format = probed.format;

    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != symphonia::core::codecs::CODEC_TYPE_NULL)
        .ok_or_else(|| AnalysisError::SourceUnavailable("no audio track found".into()))?;

    let track_id = track.id;
    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| AnalysisError::SourceUnavailable("no sample rate in audio track".into()))?;

    let dec_opts = DecoderOptions::default();
    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &dec_opts)
        .map_err(|e| AnalysisError::SourceUnavailable(format!("failed to create decoder: {e}")))?;

    let mut all_samples: Vec<f32> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(symphonia::core::errors::Error::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => {
                log::warn!("Error reading packet: {:?}", e);
                break;
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(e) => {
                log::warn!("Error decoding packet: {:?}", e);
                continue;
            }
        };

        let spec = *decoded.spec();
        let duration = decoded.capacity() as u64;

        let mut sample_buf = SampleBuffer::<f32>::new(duration, spec);
        sample_buf.copy_interleaved_ref(decoded);

        let samples = sample_buf.samples();

        // Convert to mono if stereo (average channels)
        let channels = spec.channels.count();
        if channels > 1 {
            for chunk in samples.chunks(channels) {
                let mono: f32 = chunk.iter().sum::<f32>() / channels as f32;
                all_samples.push(mono);
            }
        } else {
            all_samples.extend_from_slice(samples);
        }
    }

    if all_samples.is_empty() {
        return Err(AnalysisError::SourceUnavailable(
            "audio source produced no samples".into(),
        ));
    }

    log::debug!(
        "Decoded {} samples ({:.1}s) at {}Hz",
        all_samples.len(),
        all_samples.len() as f32 / sample_rate as f32,
        sample_rate
    );

    Ok(DecodedAudio {
        samples: all_samples,
        sample_rate,
    })
}
