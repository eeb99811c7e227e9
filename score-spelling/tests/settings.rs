use score_spelling::{
    theory::{KeyName, Letter, ScaleType},
    Accidental, ContextSettings, KeyContext,
};

#[test]
fn test_default_settings() {
    let context = KeyContext::from_settings(&ContextSettings::default()).unwrap();
    assert_eq!(context.key(), &KeyName::new(Letter::C, None, ScaleType::Major));
    assert_eq!(context.scale(), &[0, 2, 4, 5, 7, 9, 11]);
}

#[test]
fn test_settings_serde() {
    let settings = ContextSettings::new(KeyName::new(
        Letter::F,
        Accidental::Sharp,
        ScaleType::Minor,
    ));
    let json = serde_json::to_string(&settings).unwrap();
    assert_eq!(json, r#"{"key":"f#m"}"#);
    let parsed: ContextSettings = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, settings);

    let context = KeyContext::from_settings(&parsed).unwrap();
    assert_eq!(context.settings(), settings);

    let err = serde_json::from_str::<ContextSettings>(r#"{"key":"h"}"#)
        .unwrap_err()
        .to_string();
    assert!(err.contains("Invalid key: `h`"), "{err}");
}
