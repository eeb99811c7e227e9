//! Music-theory arithmetic over pitch classes, note names, intervals and
//! diatonic scales.
//!
//! Nothing here holds state: tables are process-wide constants, so every
//! function can be called from any number of key contexts at once.

pub mod accidental;
pub mod interval;
pub mod key_name;
pub mod letter;
pub mod note_name;
pub mod scale;
pub mod tables;

pub use accidental::Accidental;
pub use interval::{interval_semitones, relative_pitch_class, Direction};
pub use key_name::{KeyName, ScaleType};
pub use letter::Letter;
pub use note_name::NoteName;
pub use scale::{
    build_scale, key_scale_map, relative_spelling, scale_template,
    KeyScaleMap, ScaleDegree, Template,
};
pub use tables::{canonical_name, pitch_class_of, spellings};

/// Chromatic position irrespective of octave, always in `0..12` (0 = C).
pub type PitchClass = u8;

/// Amount of tones in the chromatic scale.
pub const NUM_TONES: u8 = 12;

/// Broad category of a failure, independent of the concrete variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// String does not match the expected grammar.
    MalformedInput,
    /// Well-formed, but absent from a table.
    UnknownLookup,
    /// Enharmonic distance is larger than a double accidental.
    UnrelatedNotes,
    /// Lookup guaranteed by map construction has failed.
    Invariant,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TheoryError {
    #[error("Invalid note name: `{0}`")]
    InvalidNote(String),
    #[error("Invalid key: `{0}`")]
    InvalidKey(String),
    #[error("Invalid direction: {0}. Expected 1 or -1")]
    InvalidDirection(i32),
    #[error("Unknown note spelling: `{0}`")]
    UnknownSpelling(String),
    #[error("Pitch class out of range: {0}")]
    PitchClassOutOfRange(PitchClass),
    #[error("Unknown interval: `{0}`")]
    UnknownInterval(String),
    #[error("Unsupported key type: `{0}`")]
    UnsupportedKeyType(String),
    #[error("Unknown scale template: `{0}`")]
    UnknownScale(String),
    #[error("Notes not related: {root}, {pitch_class}")]
    NotesNotRelated {
        root: Letter,
        pitch_class: PitchClass,
    },
}
impl TheoryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidNote(_)
            | Self::InvalidKey(_)
            | Self::InvalidDirection(_) => ErrorKind::MalformedInput,
            Self::UnknownSpelling(_)
            | Self::PitchClassOutOfRange(_)
            | Self::UnknownInterval(_)
            | Self::UnsupportedKeyType(_)
            | Self::UnknownScale(_) => ErrorKind::UnknownLookup,
            Self::NotesNotRelated { .. } => ErrorKind::UnrelatedNotes,
        }
    }
}
pub type TheoryResult<T> = Result<T, TheoryError>;

#[cfg(test)]
mod tests {
    use super::{ErrorKind, Letter, TheoryError};

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            TheoryError::InvalidNote("h".into()).kind(),
            ErrorKind::MalformedInput
        );
        assert_eq!(
            TheoryError::UnsupportedKeyType("mel".into()).kind(),
            ErrorKind::UnknownLookup
        );
        assert_eq!(
            TheoryError::NotesNotRelated {
                root: Letter::C,
                pitch_class: 3
            }
            .kind(),
            ErrorKind::UnrelatedNotes
        );
        assert_eq!(
            TheoryError::NotesNotRelated {
                root: Letter::C,
                pitch_class: 3
            }
            .to_string(),
            "Notes not related: c, 3"
        );
    }
}
