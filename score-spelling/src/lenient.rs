//! Fail-soft wrappers over the typed API, for call sites where a note
//! that can not be spelled is simply skipped.

use crate::{
    context::{KeyContext, ResolvedNote},
    theory::{self, KeyName, KeyScaleMap, Letter, NoteName, PitchClass},
};

pub fn note_name(name: &str) -> Option<NoteName> {
    name.parse().ok()
}

pub fn key_name(name: &str) -> Option<KeyName> {
    name.parse().ok()
}

pub fn pitch_class(spelling: &str) -> Option<PitchClass> {
    theory::pitch_class_of(spelling).ok()
}

pub fn canonical_name(pitch_class: PitchClass) -> Option<&'static str> {
    theory::canonical_name(pitch_class).ok()
}

pub fn interval_semitones(name: &str) -> Option<u8> {
    theory::interval_semitones(name).ok()
}

pub fn relative_pitch_class(
    pitch_class: PitchClass,
    semitones: u8,
    direction: i32,
) -> Option<PitchClass> {
    theory::relative_pitch_class(pitch_class, semitones, direction).ok()
}

pub fn relative_spelling(root: Letter, target: PitchClass) -> Option<String> {
    theory::relative_spelling(root, target).ok()
}

pub fn key_scale_map(key: &str) -> Option<KeyScaleMap> {
    theory::key_scale_map(key).ok()
}

pub fn key_context(key: &str) -> Option<KeyContext> {
    KeyContext::new(key).ok()
}

/// Resolve the note, or leave the context as is and return None.
pub fn resolve_note(
    context: &mut KeyContext,
    note: &str,
) -> Option<ResolvedNote> {
    context.resolve_note(note).ok()
}
