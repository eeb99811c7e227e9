use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::{
    scale::{Template, MAJOR, MINOR},
    Accidental, Letter, NoteName, TheoryError,
};

/// Scale type token of the key: `M`, `m`, `mel` or `harm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScaleType {
    #[default]
    Major,
    Minor,
    Melodic,
    Harmonic,
}
impl ScaleType {
    pub fn token(&self) -> &'static str {
        match self {
            Self::Major => "M",
            Self::Minor => "m",
            Self::Melodic => "mel",
            Self::Harmonic => "harm",
        }
    }

    /// Interval template, if one is tabulated for this type.
    ///
    /// Melodic and harmonic minor are reserved, but have no template.
    pub fn template(&self) -> Option<&'static Template> {
        match self {
            Self::Major => Some(&MAJOR),
            Self::Minor => Some(&MINOR),
            Self::Melodic | Self::Harmonic => None,
        }
    }
}
impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
impl FromStr for ScaleType {
    type Err = TheoryError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Self::Major),
            "m" => Ok(Self::Minor),
            "mel" => Ok(Self::Melodic),
            "harm" => Ok(Self::Harmonic),
            x => Err(TheoryError::UnsupportedKeyType(x.to_string())),
        }
    }
}

/// Key signature descriptor, like "bb", "c#m" or "F".
///
/// Only flat or sharp is allowed as key accidental. Scale type defaults
/// to major, and is case-sensitive, while the root letter is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct KeyName {
    pub root: Letter,
    pub accidental: Option<Accidental>,
    pub scale_type: ScaleType,
}
impl KeyName {
    pub fn new(
        root: Letter,
        accidental: impl Into<Option<Accidental>>,
        scale_type: ScaleType,
    ) -> Self {
        Self {
            root,
            accidental: accidental.into(),
            scale_type,
        }
    }

    /// Tonic of the key as a note spelling.
    pub fn tonic(&self) -> NoteName {
        NoteName::new(self.root, self.accidental)
    }
}
impl fmt::Display for KeyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tonic())?;
        match self.scale_type {
            ScaleType::Major => Ok(()),
            scale_type => write!(f, "{scale_type}"),
        }
    }
}
impl FromStr for KeyName {
    type Err = TheoryError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TheoryError::InvalidKey(s.to_string());
        let mut chars = s.chars();
        let root = chars.next().and_then(Letter::from_char).ok_or_else(invalid)?;
        let rest = chars.as_str();
        let (accidental, type_token) = match rest.chars().next() {
            Some('b') => (Some(Accidental::Flat), &rest[1..]),
            Some('#') => (Some(Accidental::Sharp), &rest[1..]),
            _ => (None, rest),
        };
        let scale_type = match type_token {
            "" => ScaleType::Major,
            token => token.parse().map_err(|_| invalid())?,
        };
        Ok(Self {
            root,
            accidental,
            scale_type,
        })
    }
}
impl TryFrom<String> for KeyName {
    type Error = TheoryError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
impl From<KeyName> for String {
    fn from(key: KeyName) -> Self {
        key.to_string()
    }
}
