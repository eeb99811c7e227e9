use std::collections::HashMap;

use log::{debug, trace, warn};

use super::{ContextError, ContextResult, ContextSettings};
use crate::theory::{
    pitch_class_of, Accidental, KeyName, KeyScaleMap, Letter, NoteName,
    PitchClass,
};

/// Spelling of a single note in its context.
///
/// `changed` tells the renderer to draw the accidental explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNote {
    pub spelling: String,
    pub accidental: Option<Accidental>,
    pub changed: bool,
}
impl ResolvedNote {
    pub fn new(
        spelling: impl Into<String>,
        accidental: impl Into<Option<Accidental>>,
        changed: bool,
    ) -> Self {
        Self {
            spelling: spelling.into(),
            accidental: accidental.into(),
            changed,
        }
    }
}

/// Active key with the accidental exceptions accumulated so far.
///
/// Holds spelling per letter and per pitch class, plus frozen snapshot of
/// the diatonic spellings per pitch class, taken when the key was set.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyContext {
    key: KeyName,
    scale: Vec<PitchClass>,
    by_letter: HashMap<Letter, String>,
    by_value: HashMap<PitchClass, String>,
    original_by_value: HashMap<PitchClass, String>,
}
impl KeyContext {
    /// Parse the key signature and build context for it.
    ///
    /// # Example
    /// ```
    /// # use score_spelling::context::{KeyContext, ResolvedNote};
    /// # use score_spelling::theory::Accidental;
    /// let mut context = KeyContext::new("f").unwrap();
    /// assert_eq!(
    ///     context.resolve_note("bb").unwrap(),
    ///     ResolvedNote::new("bb", Accidental::Flat, false)
    /// );
    /// assert!(context.resolve_note("bn").unwrap().changed);
    /// ```
    pub fn new(key: &str) -> ContextResult<Self> {
        Self::from_key(key.parse()?)
    }

    pub fn from_key(key: KeyName) -> ContextResult<Self> {
        let scale_map = KeyScaleMap::new(key)?;
        let mut by_letter = HashMap::new();
        let mut by_value = HashMap::new();
        for degree in scale_map.degrees() {
            by_letter.insert(degree.letter, degree.spelling.clone());
            by_value.insert(degree.pitch_class, degree.spelling.clone());
        }
        debug!("key context set: {}", scale_map);
        Ok(Self {
            key,
            scale: scale_map.scale().to_vec(),
            by_letter,
            original_by_value: by_value.clone(),
            by_value,
        })
    }

    pub fn from_settings(settings: &ContextSettings) -> ContextResult<Self> {
        Self::from_key(settings.key)
    }

    pub fn settings(&self) -> ContextSettings {
        ContextSettings::new(self.key)
    }

    /// Replace the key. All accidental exceptions are discarded.
    ///
    /// On error the context is left untouched.
    pub fn set_key(&mut self, key: &str) -> ContextResult<()> {
        *self = Self::new(key)?;
        Ok(())
    }

    /// Drop accidental exceptions, keeping the key (e.g. on barline).
    pub fn reset(&mut self) -> ContextResult<()> {
        *self = Self::from_key(self.key)?;
        Ok(())
    }

    pub fn key(&self) -> &KeyName {
        &self.key
    }

    /// Diatonic pitch classes of the key, starting from the tonic.
    pub fn scale(&self) -> &[PitchClass] {
        &self.scale
    }

    /// Current spelling of the letter, including exceptions.
    pub fn spelling_for(&self, letter: Letter) -> Option<&str> {
        self.by_letter.get(&letter).map(String::as_str)
    }

    /// Current spelling, producing the pitch class, if any.
    pub fn spelling_at(&self, pitch_class: PitchClass) -> Option<&str> {
        self.by_value.get(&pitch_class).map(String::as_str)
    }

    /// Spelling of the root letter of `name` in the current context.
    ///
    /// `name` can be a note or a key; only its root letter is used.
    pub fn key_note(&self, name: &str) -> ContextResult<NoteName> {
        let root = match name.parse::<NoteName>() {
            Ok(note) => note.root,
            Err(err) => match name.parse::<KeyName>() {
                Ok(key) => key.root,
                Err(_) => return Err(err.into()),
            },
        };
        parse_stored(self.letter_spelling(root)?)
    }

    /// Spell the note in the current context, updating the context when
    /// the note introduces (or cancels) an accidental.
    ///
    /// Notes are checked in order against: the letter spelling as is; any
    /// current spelling of the same pitch; the diatonic spelling of the
    /// pitch; the natural letter; and finally installed as a new
    /// exception for its letter.
    pub fn resolve_note(&mut self, note: &str) -> ContextResult<ResolvedNote> {
        let note = note.to_lowercase();
        let parts: NoteName = note.parse()?;
        let scale_note = self.letter_spelling(parts.root)?.to_string();

        if note == scale_note {
            trace!("{note}: matches key context");
            return Ok(ResolvedNote::new(note, parts.accidental, false));
        }

        let value = pitch_class_of(&note)?;
        if let Some(existing) = self.by_value.get(&value) {
            trace!("{note}: spelled as {existing} in key context");
            let accidental = parse_stored(existing)?.accidental;
            return Ok(ResolvedNote::new(existing.clone(), accidental, false));
        }

        // All lookups happen before the maps are touched.
        let scale_value = stored_pitch_class(&scale_note)?;
        if let Some(original) = self.original_by_value.get(&value).cloned() {
            let accidental = parse_stored(&original)?.accidental;
            debug!("{note}: back to diatonic {original}");
            self.replace(parts.root, scale_value, value, original.clone());
            return Ok(ResolvedNote::new(original, accidental, true));
        }

        let natural = parts.root.to_string();
        if note == natural {
            debug!("{note}: natural instead of {scale_note}");
            self.replace(parts.root, scale_value, value, natural.clone());
            return Ok(ResolvedNote::new(natural, None, true));
        }

        debug!("{note}: new accidental instead of {scale_note}");
        self.replace(parts.root, scale_value, value, note.clone());
        Ok(ResolvedNote::new(note, parts.accidental, true))
    }

    /// Resolve notes in document order.
    ///
    /// Failed note yields its error and does not stop the following ones.
    pub fn resolve_all<I, S>(
        &mut self,
        notes: I,
    ) -> Vec<ContextResult<ResolvedNote>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        notes
            .into_iter()
            .map(|note| {
                let note = note.as_ref();
                let resolved = self.resolve_note(note);
                if let Err(err) = &resolved {
                    warn!("skipping note `{note}`: {err}");
                }
                resolved
            })
            .collect()
    }

    fn letter_spelling(&self, letter: Letter) -> ContextResult<&str> {
        self.spelling_for(letter)
            .ok_or(ContextError::MissingLetter(letter))
    }

    /// Move the letter from its current pitch to the new spelling.
    fn replace(
        &mut self,
        letter: Letter,
        old_value: PitchClass,
        value: PitchClass,
        spelling: String,
    ) {
        self.by_value.remove(&old_value);
        self.by_value.insert(value, spelling.clone());
        self.by_letter.insert(letter, spelling);
    }
}

fn parse_stored(spelling: &str) -> ContextResult<NoteName> {
    spelling
        .parse()
        .map_err(|_| ContextError::CorruptSpelling(spelling.to_string()))
}

fn stored_pitch_class(spelling: &str) -> ContextResult<PitchClass> {
    pitch_class_of(spelling)
        .map_err(|_| ContextError::CorruptSpelling(spelling.to_string()))
}
