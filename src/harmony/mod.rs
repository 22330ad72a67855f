//! Accompaniment generation
//!
//! Pure, stateless mapping from each melody note to a major triad built on
//! its pitch class.

use crate::model::Note;

/// Semitone offset of the major third above the root
const MAJOR_THIRD: i32 = 4;

/// Semitone offset of the perfect fifth above the root
const PERFECT_FIFTH: i32 = 7;

/// Derive the triad for a single note
///
/// The root is the note's pitch class (floor modulo, so negative pitches
/// still land in [0,11]). Third and fifth are offsets above the root and
/// intentionally not wrapped back into pitch-class range. All three share
/// the source note's start and duration.
pub fn triad(note: &Note) -> [Note; 3] {
    let root = note.pitch.rem_euclid(12);
    [
        Note::accompaniment(root, note.start, note.duration),
        Note::accompaniment(root + MAJOR_THIRD, note.start, note.duration),
        Note::accompaniment(root + PERFECT_FIFTH, note.start, note.duration),
    ]
}

/// Generate accompaniment for an ordered note sequence
///
/// Order-preserving: each input note yields a contiguous triple in output,
/// so N input notes produce exactly 3N accompaniment notes.
pub fn generate_accompaniment(notes: &[Note]) -> Vec<Note> {
    let mut accompaniment = Vec::with_capacity(notes.len() * 3);
    for note in notes {
        accompaniment.extend_from_slice(&triad(note));
    }
    accompaniment
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NoteSource, ACCOMPANIMENT_VELOCITY};

    #[test]
    fn test_triad_for_middle_c() {
        let note = Note::extracted(60, 0.0, 0.5);
        let chord = triad(&note);

        assert_eq!(chord[0].pitch, 0);
        assert_eq!(chord[1].pitch, 4);
        assert_eq!(chord[2].pitch, 7);
        for n in &chord {
            assert!((n.start - 0.0).abs() < 1e-6);
            assert!((n.duration - 0.5).abs() < 1e-6);
            assert_eq!(n.velocity, ACCOMPANIMENT_VELOCITY);
            assert_eq!(n.source, NoteSource::Accompaniment);
        }
    }

    #[test]
    fn test_triad_root_is_pitch_class() {
        let chord = triad(&Note::extracted(71, 0.0, 1.0));
        assert_eq!(chord[0].pitch, 11);
        assert_eq!(chord[1].pitch, 15);
        assert_eq!(chord[2].pitch, 18);
    }

    #[test]
    fn test_negative_pitch_wraps_into_pitch_class_range() {
        let chord = triad(&Note::extracted(-1, 0.0, 1.0));
        assert_eq!(chord[0].pitch, 11);

        let chord = triad(&Note::extracted(-13, 0.0, 1.0));
        assert_eq!(chord[0].pitch, 11);

        let chord = triad(&Note::extracted(-12, 0.0, 1.0));
        assert_eq!(chord[0].pitch, 0);
    }

    #[test]
    fn test_fan_out_is_three_per_note() {
        let notes = vec![
            Note::extracted(60, 0.0, 0.5),
            Note::extracted(64, 0.5, 0.3),
            Note::extracted(67, 0.8, 0.2),
        ];
        let accomp = generate_accompaniment(&notes);

        assert_eq!(accomp.len(), 9);
        for (i, note) in notes.iter().enumerate() {
            let chord = &accomp[i * 3..i * 3 + 3];
            let root = note.pitch.rem_euclid(12);
            assert_eq!(chord[0].pitch, root);
            assert_eq!(chord[1].pitch, root + 4);
            assert_eq!(chord[2].pitch, root + 7);
            for n in chord {
                assert_eq!(n.start, note.start);
                assert_eq!(n.duration, note.duration);
            }
        }
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert!(generate_accompaniment(&[]).is_empty());
    }
}
