//! Pitch-frame production layer
//!
//! Pitch estimation itself is delegated to an external engine behind the
//! [`PitchTracker`] trait, so the segmenter can be tested with synthetic
//! frame sequences instead of a real DSP backend.

mod frames;
mod stub;
mod traits;
mod yin;

pub use frames::FrameSource;
pub use stub::ScriptedTracker;
pub use traits::{PitchFrame, PitchTracker};
pub use yin::YinTracker;

/// Analysis window length in samples
pub const WINDOW_SIZE: usize = 2048;

/// Hop length in samples - one pitch frame is produced per hop
pub const HOP_SIZE: usize = 512;
