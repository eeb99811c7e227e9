use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{PitchClass, TheoryError, TheoryResult, NUM_TONES};

/// Interval names with their aliases. Quality prefixes are case-sensitive:
/// "m3" is minor third, "M3" is major.
static INTERVALS: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    HashMap::from([
        ("u", 0),
        ("unison", 0),
        ("P1", 0),
        ("1", 0),
        ("m2", 1),
        ("b2", 1),
        ("min2", 1),
        ("S", 1),
        ("H", 1),
        ("M2", 2),
        ("2", 2),
        ("maj2", 2),
        ("T", 2),
        ("W", 2),
        ("m3", 3),
        ("b3", 3),
        ("min3", 3),
        ("#2", 3),
        ("M3", 4),
        ("3", 4),
        ("maj3", 4),
        ("P4", 5),
        ("4", 5),
        ("p4", 5),
        ("#4", 6),
        ("b5", 6),
        ("aug4", 6),
        ("dim5", 6),
        ("tritone", 6),
        ("P5", 7),
        ("5", 7),
        ("p5", 7),
        ("#5", 8),
        ("b6", 8),
        ("aug5", 8),
        ("m6", 8),
        ("min6", 8),
        ("M6", 9),
        ("6", 9),
        ("maj6", 9),
        ("bb7", 9),
        ("dim7", 9),
        ("m7", 10),
        ("b7", 10),
        ("min7", 10),
        ("dom7", 10),
        ("M7", 11),
        ("7", 11),
        ("maj7", 11),
        ("P8", 12),
        ("8", 12),
        ("octave", 12),
    ])
});

/// Semitone count of the named interval.
pub fn interval_semitones(name: &str) -> TheoryResult<u8> {
    INTERVALS
        .get(name)
        .copied()
        .ok_or_else(|| TheoryError::UnknownInterval(name.to_string()))
}

/// Direction of a pitch-class shift around the chromatic circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}
impl Direction {
    pub fn sign(&self) -> i32 {
        match self {
            Self::Up => 1,
            Self::Down => -1,
        }
    }

    /// Move the pitch class by the given amount of semitones, wrapping
    /// into `0..12`.
    pub fn shift(&self, pitch_class: PitchClass, semitones: u8) -> PitchClass {
        let shifted = pitch_class as i32 + self.sign() * semitones as i32;
        shifted.rem_euclid(NUM_TONES as i32) as PitchClass
    }
}
impl TryFrom<i32> for Direction {
    type Error = TheoryError;
    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Up),
            -1 => Ok(Self::Down),
            x => Err(TheoryError::InvalidDirection(x)),
        }
    }
}

/// `(pitch_class + direction * semitones) mod 12`, where direction must be
/// exactly 1 or -1.
///
/// # Example
/// ```
/// # use score_spelling::theory::relative_pitch_class;
/// assert_eq!(relative_pitch_class(2, 3, -1).unwrap(), 11);
/// assert!(relative_pitch_class(2, 3, 2).is_err());
/// ```
pub fn relative_pitch_class(
    pitch_class: PitchClass,
    semitones: u8,
    direction: i32,
) -> TheoryResult<PitchClass> {
    Ok(Direction::try_from(direction)?.shift(pitch_class, semitones))
}
