//! Key context: spells incoming notes against the active key signature,
//! remembering accidentals introduced earlier in the same context (e.g.
//! measure).
//!
//! One [`KeyContext`] per notational context. Notes must be resolved in
//! document order, as every resolution may change how the following
//! notes are spelled.

use crate::theory::{ErrorKind, Letter, TheoryError};

pub mod key_context;
pub mod settings;

pub use key_context::{KeyContext, ResolvedNote};
pub use settings::ContextSettings;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    #[error(transparent)]
    Theory(#[from] TheoryError),
    #[error("Key map has no spelling for letter `{0}`")]
    MissingLetter(Letter),
    #[error("Key map holds invalid spelling: `{0}`")]
    CorruptSpelling(String),
}
impl ContextError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Theory(err) => err.kind(),
            Self::MissingLetter(_) | Self::CorruptSpelling(_) => {
                ErrorKind::Invariant
            }
        }
    }
}
pub type ContextResult<T> = Result<T, ContextError>;
