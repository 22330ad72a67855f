//! Hum Transcriber - monophonic note extraction and accompaniment
//!
//! This library turns a hummed or sung recording into discrete notes by
//! running a pitch tracker over fixed-size hops and merging runs of stable,
//! confident pitch. A simple triad accompaniment can then be derived from
//! the extracted notes.

pub mod decode;
pub mod error;
pub mod harmony;
pub mod model;
pub mod pitch;
pub mod segment;
pub mod service;

pub use error::AnalysisError;
pub use segment::SegmenterConfig;
pub use service::AnalysisService;
