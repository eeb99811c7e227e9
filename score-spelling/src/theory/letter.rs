use std::fmt;

use super::PitchClass;

/// Root letter of a note, without accidental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}
impl Letter {
    /// Letters in their cycle order, starting from C.
    pub const ALL: [Self; 7] =
        [Self::C, Self::D, Self::E, Self::F, Self::G, Self::A, Self::B];

    /// Case-insensitive.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'c' => Some(Self::C),
            'd' => Some(Self::D),
            'e' => Some(Self::E),
            'f' => Some(Self::F),
            'g' => Some(Self::G),
            'a' => Some(Self::A),
            'b' => Some(Self::B),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Self::C => 'c',
            Self::D => 'd',
            Self::E => 'e',
            Self::F => 'f',
            Self::G => 'g',
            Self::A => 'a',
            Self::B => 'b',
        }
    }

    /// Pitch class of the letter without any accidental.
    pub fn natural_pitch_class(&self) -> PitchClass {
        match self {
            Self::C => 0,
            Self::D => 2,
            Self::E => 4,
            Self::F => 5,
            Self::G => 7,
            Self::A => 9,
            Self::B => 11,
        }
    }

    /// All seven letters, starting from self and wrapping after B.
    ///
    /// # Example
    /// ```
    /// # use score_spelling::theory::Letter;
    /// let letters: String =
    ///     Letter::A.cycle_from().map(|l| l.as_char()).collect();
    /// assert_eq!(letters, "abcdefg");
    /// ```
    pub fn cycle_from(self) -> impl Iterator<Item = Letter> {
        Self::ALL
            .into_iter()
            .cycle()
            .skip_while(move |letter| *letter != self)
            .take(Self::ALL.len())
    }
}
impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::Letter;

    #[test]
    fn test_from_char() {
        assert_eq!(Letter::from_char('G'), Some(Letter::G));
        assert_eq!(Letter::from_char('b'), Some(Letter::B));
        assert_eq!(Letter::from_char('h'), None);
    }

    #[test]
    fn test_cycle() {
        assert_eq!(
            Letter::E.cycle_from().collect::<Vec<_>>(),
            vec![
                Letter::E,
                Letter::F,
                Letter::G,
                Letter::A,
                Letter::B,
                Letter::C,
                Letter::D
            ]
        );
        assert_eq!(Letter::C.cycle_from().count(), 7);
    }
}
