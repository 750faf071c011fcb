use digest_core::types::SummaryRatio;
use digest_core::{ConfigError, SummarizerConfig};

#[test]
fn percent_input_is_clamped_and_defaulted() {
    let cases = [
        (Some("150"), 50),
        (Some("50"), 50),
        (Some("20"), 20),
        (Some(" 35 "), 35),
        (Some("5"), 5),
        (Some("1"), 5),
        (Some("-5"), 5),
        (Some("abc"), 20),
        (Some("2.5"), 20),
        (Some(""), 20),
        (None, 20),
    ];

    for (input, expected) in cases {
        assert_eq!(
            SummaryRatio::from_percent_input(input).percent(),
            expected,
            "input {input:?}"
        );
    }
}

#[test]
fn integers_beyond_i64_still_clamp() {
    assert_eq!(SummaryRatio::from_percent_input(Some("99999999999999999999")).percent(), 50);
    assert_eq!(SummaryRatio::from_percent_input(Some("-99999999999999999999")).percent(), 5);
    assert_eq!(SummaryRatio::from_percent_input(Some("1e3")).percent(), 20);
}

#[test]
fn over_range_percent_becomes_one_half() {
    let ratio = SummaryRatio::from_percent_input(Some("150"));
    assert_eq!(ratio.fraction(), 0.5);
}

#[test]
fn configured_bounds_apply_to_parsing() {
    let config = SummarizerConfig {
        default_percent: 30,
        min_percent: 10,
        max_percent: 40,
        ..SummarizerConfig::v0()
    };
    assert_eq!(SummaryRatio::from_percent_input_with(Some("90"), &config).percent(), 40);
    assert_eq!(SummaryRatio::from_percent_input_with(Some("x"), &config).percent(), 30);
    assert_eq!(SummaryRatio::from_percent_input_with(Some("3"), &config).percent(), 10);
}

#[test]
fn v0_defaults() {
    let config = SummarizerConfig::v0();
    assert_eq!(config.default_percent, 20);
    assert_eq!((config.min_percent, config.max_percent), (5, 50));
    assert_eq!((config.min_bullets, config.max_bullets), (5, 10));
    assert_eq!(config.fallback_chars, 500);
    assert_eq!(config.keyword_count, 10);
    assert_eq!(config.min_input_words, 50);
    assert_eq!(config.generative_word_limit, 12_000);
    assert_eq!(config, SummarizerConfig::default());
    assert!(config.validate().is_ok());
}

#[test]
fn json_config_fills_missing_fields_from_v0() {
    let config = SummarizerConfig::from_json(r#"{"keyword_count": 15}"#).unwrap();
    assert_eq!(config.keyword_count, 15);
    assert_eq!(config.max_bullets, 10);

    assert_eq!(SummarizerConfig::from_json("{}").unwrap(), SummarizerConfig::v0());
}

#[test]
fn inconsistent_json_config_is_rejected() {
    let err = SummarizerConfig::from_json(r#"{"min_bullets": 12}"#).unwrap_err();
    assert!(matches!(err, ConfigError::BulletBounds { min: 12, max: 10 }));

    let err = SummarizerConfig::from_json(r#"{"min_percent": 60}"#).unwrap_err();
    assert!(matches!(err, ConfigError::PercentBounds { min: 60, max: 50 }));

    let err = SummarizerConfig::from_json(r#"{"default_percent": 80}"#).unwrap_err();
    assert!(matches!(err, ConfigError::DefaultPercentOutOfBounds(80)));

    let err = SummarizerConfig::from_json("not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}
