//! Domain data model

mod note;

pub use note::{Note, NoteSource, ACCOMPANIMENT_VELOCITY, EXTRACTED_VELOCITY};
