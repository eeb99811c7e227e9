use itertools::Itertools;
use score_spelling::theory::{
    build_scale, canonical_name, key_scale_map, pitch_class_of,
    relative_spelling, spellings, Direction, KeyName, Letter, TheoryError,
    NUM_TONES,
};

fn all_keys() -> Vec<String> {
    Letter::ALL
        .iter()
        .cartesian_product(["", "b", "#"])
        .cartesian_product(["", "m"])
        .map(|((letter, accidental), scale_type)| {
            format!("{letter}{accidental}{scale_type}")
        })
        .collect()
}

#[test]
fn test_round_trip() {
    for (spelling, pitch_class) in spellings() {
        let name = canonical_name(pitch_class).unwrap();
        assert_eq!(pitch_class_of(name).unwrap(), pitch_class, "{spelling}");
    }
}

#[test]
fn test_scale_closure() {
    for key in all_keys() {
        let key: KeyName = key.parse().unwrap();
        let template = key.scale_type.template().unwrap();
        let start = key.tonic().pitch_class().unwrap();
        let scale = build_scale(start, template);
        assert_eq!(scale.len(), 7, "{key}");
        assert_eq!(scale.iter().unique().count(), 7, "{key}");
        assert_eq!(Direction::Up.shift(scale[6], template[6]), start, "{key}");
    }
}

#[test]
fn test_every_key_is_spellable() {
    for key in all_keys() {
        let map = key_scale_map(&key).expect("Can not build scale map");
        let letters = map.degrees().iter().map(|degree| degree.letter);
        let expected = map.key().root.cycle_from();
        letters.zip_eq(expected).for_each(|(a, b)| assert_eq!(a, b));
        for degree in map.degrees() {
            assert_eq!(
                pitch_class_of(&degree.spelling).unwrap(),
                degree.pitch_class,
                "{key}: {}",
                degree.spelling
            );
            assert!(degree.spelling.len() >= 2);
        }
    }
}

#[test]
fn test_relative_spelling_matches_table() {
    for (spelling, pitch_class) in spellings() {
        let root = Letter::from_char(spelling.chars().next().unwrap()).unwrap();
        let expected = spelling.strip_suffix('n').unwrap_or(spelling);
        assert_eq!(
            relative_spelling(root, pitch_class).unwrap(),
            expected,
            "{spelling}"
        );
    }
}

#[test]
fn test_relation_cap() {
    for root in Letter::ALL {
        let natural = root.natural_pitch_class();
        for distance in 3..=(NUM_TONES - 3) {
            let up = Direction::Up.shift(natural, distance);
            assert_eq!(
                relative_spelling(root, up),
                Err(TheoryError::NotesNotRelated {
                    root,
                    pitch_class: up
                })
            );
        }
    }
}
