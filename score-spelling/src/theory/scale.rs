//! Diatonic scales and spelling of notes relative to a root letter.

use std::fmt;

use itertools::Itertools;

use super::{
    Direction, KeyName, Letter, PitchClass, TheoryError, TheoryResult,
    NUM_TONES,
};

/// Seven semitone steps summing to an octave.
pub type Template = [u8; 7];

pub const MAJOR: Template = [2, 2, 1, 2, 2, 2, 1];
pub const MINOR: Template = [2, 1, 2, 2, 1, 2, 2];
pub const DORIAN: Template = [2, 1, 2, 2, 2, 1, 2];
pub const PHRYGIAN: Template = [1, 2, 2, 2, 1, 2, 2];
pub const LYDIAN: Template = [2, 2, 2, 1, 2, 2, 1];
pub const MIXOLYDIAN: Template = [2, 2, 1, 2, 2, 1, 2];
pub const LOCRIAN: Template = [1, 2, 2, 1, 2, 2, 2];

/// Look up an interval template by mode name.
pub fn scale_template(name: &str) -> TheoryResult<&'static Template> {
    match name.to_lowercase().as_str() {
        "major" | "ionian" => Ok(&MAJOR),
        "minor" | "aeolian" => Ok(&MINOR),
        "dorian" => Ok(&DORIAN),
        "phrygian" => Ok(&PHRYGIAN),
        "lydian" => Ok(&LYDIAN),
        "mixolydian" => Ok(&MIXOLYDIAN),
        "locrian" => Ok(&LOCRIAN),
        _ => Err(TheoryError::UnknownScale(name.to_string())),
    }
}

/// Walk the template from `start`, collecting tones until the octave
/// closes.
///
/// # Example
/// ```
/// # use score_spelling::theory::{build_scale, scale::MAJOR};
/// assert_eq!(build_scale(7, &MAJOR), vec![7, 9, 11, 0, 2, 4, 6]);
/// ```
pub fn build_scale(start: PitchClass, template: &[u8]) -> Vec<PitchClass> {
    let mut tones = vec![start];
    let mut current = start;
    for step in template {
        let next = Direction::Up.shift(current, *step);
        if next == start {
            break;
        }
        tones.push(next);
        current = next;
    }
    tones
}

/// Spell `target` with the given root letter and up to two accidentals.
///
/// Distances larger than `NUM_TONES - 3` are measured the other way round
/// the chromatic circle, so "b" relates to 0 as "b#". The natural spelling
/// is returned as bare letter.
///
/// # Example
/// ```
/// # use score_spelling::theory::{relative_spelling, Letter};
/// assert_eq!(relative_spelling(Letter::E, 3).unwrap(), "eb");
/// assert_eq!(relative_spelling(Letter::C, 11).unwrap(), "cb");
/// assert_eq!(relative_spelling(Letter::B, 1).unwrap(), "b##");
/// assert!(relative_spelling(Letter::C, 3).is_err());
/// ```
pub fn relative_spelling(
    root: Letter,
    target: PitchClass,
) -> TheoryResult<String> {
    if target >= NUM_TONES {
        return Err(TheoryError::PitchClassOutOfRange(target));
    }
    let tones = NUM_TONES as i32;
    let mut interval = target as i32 - root.natural_pitch_class() as i32;
    if interval.abs() > tones - 3 {
        interval = -interval.signum() * (tones - interval.abs());
    }
    if interval.abs() > 2 {
        return Err(TheoryError::NotesNotRelated {
            root,
            pitch_class: target,
        });
    }
    let symbol = if interval > 0 { "#" } else { "b" };
    Ok(format!("{root}{}", symbol.repeat(interval.unsigned_abs() as usize)))
}

/// One degree of a key: letter, its spelling and pitch class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleDegree {
    pub letter: Letter,
    pub spelling: String,
    pub pitch_class: PitchClass,
}

/// Diatonic spelling of every letter in a key.
///
/// Degrees start at the key root letter. Natural degrees are spelled with
/// explicit "n", e.g. "bn" in C major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyScaleMap {
    key: KeyName,
    scale: Vec<PitchClass>,
    degrees: Vec<ScaleDegree>,
}
impl KeyScaleMap {
    pub fn new(key: KeyName) -> TheoryResult<Self> {
        let template = key
            .scale_type
            .template()
            .ok_or_else(|| {
                TheoryError::UnsupportedKeyType(key.scale_type.to_string())
            })?;
        let scale = build_scale(key.tonic().pitch_class()?, template);
        let degrees = key
            .root
            .cycle_from()
            .zip(scale.iter())
            .map(|(letter, pitch_class)| -> TheoryResult<ScaleDegree> {
                let mut spelling = relative_spelling(letter, *pitch_class)?;
                if spelling.len() == 1 {
                    spelling.push('n');
                }
                Ok(ScaleDegree {
                    letter,
                    spelling,
                    pitch_class: *pitch_class,
                })
            })
            .collect::<TheoryResult<Vec<_>>>()?;
        Ok(Self {
            key,
            scale,
            degrees,
        })
    }

    pub fn key(&self) -> &KeyName {
        &self.key
    }
    pub fn scale(&self) -> &[PitchClass] {
        &self.scale
    }
    pub fn degrees(&self) -> &[ScaleDegree] {
        &self.degrees
    }

    /// Spelling of the letter in this key.
    pub fn spelling(&self, letter: Letter) -> Option<&str> {
        self.degrees
            .iter()
            .find(|degree| degree.letter == letter)
            .map(|degree| degree.spelling.as_str())
    }
}
impl fmt::Display for KeyScaleMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.key,
            self.degrees.iter().map(|degree| &degree.spelling).join(" ")
        )
    }
}

/// Parse the key signature and spell its scale.
pub fn key_scale_map(key: &str) -> TheoryResult<KeyScaleMap> {
    KeyScaleMap::new(key.parse()?)
}
