//! Fixed spelling tables.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{PitchClass, TheoryError, TheoryResult, NUM_TONES};

/// Every letter with each of the five accidentals. Natural is always
/// spelled with explicit "n".
static SPELLINGS: Lazy<HashMap<&'static str, PitchClass>> = Lazy::new(|| {
    HashMap::from([
        ("cbb", 10),
        ("cb", 11),
        ("cn", 0),
        ("c#", 1),
        ("c##", 2),
        ("dbb", 0),
        ("db", 1),
        ("dn", 2),
        ("d#", 3),
        ("d##", 4),
        ("ebb", 2),
        ("eb", 3),
        ("en", 4),
        ("e#", 5),
        ("e##", 6),
        ("fbb", 3),
        ("fb", 4),
        ("fn", 5),
        ("f#", 6),
        ("f##", 7),
        ("gbb", 5),
        ("gb", 6),
        ("gn", 7),
        ("g#", 8),
        ("g##", 9),
        ("abb", 7),
        ("ab", 8),
        ("an", 9),
        ("a#", 10),
        ("a##", 11),
        ("bbb", 9),
        ("bb", 10),
        ("bn", 11),
        ("b#", 0),
        ("b##", 1),
    ])
});

/// Sharp-only names, indexed by pitch class.
const CANONICAL_NAMES: [&str; NUM_TONES as usize] =
    ["c", "c#", "d", "d#", "e", "f", "f#", "g", "g#", "a", "a#", "b"];

/// Pitch class of the spelling. Bare letter is read as natural.
///
/// # Example
/// ```
/// # use score_spelling::theory::pitch_class_of;
/// assert_eq!(pitch_class_of("b#").unwrap(), 0);
/// assert_eq!(pitch_class_of("E").unwrap(), 4);
/// assert!(pitch_class_of("h").is_err());
/// ```
pub fn pitch_class_of(spelling: &str) -> TheoryResult<PitchClass> {
    let mut key = spelling.to_lowercase();
    if key.chars().count() == 1 {
        key.push('n');
    }
    SPELLINGS
        .get(key.as_str())
        .copied()
        .ok_or_else(|| TheoryError::UnknownSpelling(spelling.to_string()))
}

pub fn canonical_name(pitch_class: PitchClass) -> TheoryResult<&'static str> {
    CANONICAL_NAMES
        .get(pitch_class as usize)
        .copied()
        .ok_or(TheoryError::PitchClassOutOfRange(pitch_class))
}

/// All tabulated spellings with their pitch classes, in no particular order.
pub fn spellings() -> impl Iterator<Item = (&'static str, PitchClass)> {
    SPELLINGS.iter().map(|(spelling, pc)| (*spelling, *pc))
}

#[cfg(test)]
mod tests {
    use super::{canonical_name, pitch_class_of, spellings};
    use crate::theory::TheoryError;

    #[test]
    fn test_pitch_class_of() {
        assert_eq!(pitch_class_of("cbb"), Ok(10));
        assert_eq!(pitch_class_of("Fb"), Ok(4));
        assert_eq!(pitch_class_of("g##"), Ok(9));
        assert_eq!(pitch_class_of("a"), pitch_class_of("an"));
        assert_eq!(
            pitch_class_of("c###"),
            Err(TheoryError::UnknownSpelling("c###".to_string()))
        );
        assert!(pitch_class_of("").is_err());
    }

    #[test]
    fn test_canonical_name() {
        assert_eq!(canonical_name(0), Ok("c"));
        assert_eq!(canonical_name(10), Ok("a#"));
        assert_eq!(canonical_name(12), Err(TheoryError::PitchClassOutOfRange(12)));
    }

    #[test]
    fn test_table_size() {
        assert_eq!(spellings().count(), 35);
        assert!(spellings().all(|(_, pc)| pc < 12));
    }
}
