use std::{fmt, str::FromStr};

use super::TheoryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Accidental {
    DoubleFlat,
    Flat,
    Natural,
    Sharp,
    DoubleSharp,
}
impl Accidental {
    pub const ALL: [Self; 5] = [
        Self::DoubleFlat,
        Self::Flat,
        Self::Natural,
        Self::Sharp,
        Self::DoubleSharp,
    ];

    /// Textual token, as it is written after the note letter.
    pub fn token(&self) -> &'static str {
        match self {
            Self::DoubleFlat => "bb",
            Self::Flat => "b",
            Self::Natural => "n",
            Self::Sharp => "#",
            Self::DoubleSharp => "##",
        }
    }

    /// Offset from the natural letter, in semitones.
    pub fn semitones(&self) -> i8 {
        match self {
            Self::DoubleFlat => -2,
            Self::Flat => -1,
            Self::Natural => 0,
            Self::Sharp => 1,
            Self::DoubleSharp => 2,
        }
    }
}
impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
impl FromStr for Accidental {
    type Err = TheoryError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bb" => Ok(Self::DoubleFlat),
            "b" => Ok(Self::Flat),
            "n" => Ok(Self::Natural),
            "#" => Ok(Self::Sharp),
            "##" => Ok(Self::DoubleSharp),
            x => Err(TheoryError::InvalidNote(x.to_string())),
        }
    }
}
