//! Enharmonic spelling engine for music notation.
//!
//! [`theory`] holds the stateless arithmetic over pitch classes, note and
//! key names, intervals and scales. [`context`] decides how each note of a
//! sequence should be written in the active key, tracking accidentals
//! introduced along the way. [`lenient`] exposes the same operations
//! returning `Option`.

pub mod context;
pub mod lenient;
pub mod theory;

pub use context::{
    ContextError, ContextResult, ContextSettings, KeyContext, ResolvedNote,
};
pub use theory::{
    Accidental, ErrorKind, KeyName, Letter, NoteName, PitchClass, ScaleType,
    TheoryError, TheoryResult,
};
