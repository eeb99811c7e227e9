use std::{fmt, str::FromStr};

use super::{
    pitch_class_of, Accidental, Letter, PitchClass, TheoryError, TheoryResult,
};

/// Parsed note spelling: letter root and optional accidental.
///
/// Grammar is `letter[bb|b|n|#|##]?`, case-insensitive. Bare letter is
/// kept without accidental, but denotes the same pitch as natural.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteName {
    pub root: Letter,
    pub accidental: Option<Accidental>,
}
impl NoteName {
    pub fn new(
        root: Letter,
        accidental: impl Into<Option<Accidental>>,
    ) -> Self {
        Self {
            root,
            accidental: accidental.into(),
        }
    }

    /// Pitch class from the spelling table.
    ///
    /// # Example
    /// ```
    /// # use score_spelling::theory::NoteName;
    /// let note: NoteName = "Cb".parse().unwrap();
    /// assert_eq!(note.pitch_class().unwrap(), 11);
    /// ```
    pub fn pitch_class(&self) -> TheoryResult<PitchClass> {
        pitch_class_of(&self.to_string())
    }
}
impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)?;
        match self.accidental {
            Some(accidental) => write!(f, "{accidental}"),
            None => Ok(()),
        }
    }
}
impl FromStr for NoteName {
    type Err = TheoryError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TheoryError::InvalidNote(s.to_string());
        let lower = s.to_lowercase();
        let mut chars = lower.chars();
        let root = chars.next().and_then(Letter::from_char).ok_or_else(invalid)?;
        let accidental = match chars.as_str() {
            "" => None,
            token => Some(token.parse().map_err(|_| invalid())?),
        };
        Ok(Self { root, accidental })
    }
}

#[cfg(test)]
mod tests {
    use super::NoteName;
    use crate::theory::{Accidental, Letter, TheoryError};

    #[test]
    fn test_parse() {
        assert_eq!(
            "bb".parse::<NoteName>(),
            Ok(NoteName::new(Letter::B, Accidental::Flat))
        );
        assert_eq!(
            "C##".parse::<NoteName>(),
            Ok(NoteName::new(Letter::C, Accidental::DoubleSharp))
        );
        assert_eq!(
            "bbb".parse::<NoteName>(),
            Ok(NoteName::new(Letter::B, Accidental::DoubleFlat))
        );
        assert_eq!("e".parse::<NoteName>(), Ok(NoteName::new(Letter::E, None)));
        assert_eq!("EN".parse::<NoteName>().unwrap().to_string(), "en");
    }

    #[test]
    fn test_parse_errors() {
        for bad in ["", "h", "c###", "cbbb", "c#b", "cm", "#"] {
            assert_eq!(
                bad.parse::<NoteName>(),
                Err(TheoryError::InvalidNote(bad.to_string())),
                "{bad}"
            );
        }
    }
}
