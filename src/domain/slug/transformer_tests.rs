// src/domain/slug/transformer_tests.rs
use super::config::{SlugConfig, SlugDefaults, SlugOverrides};
use super::transformer::{transform, truncate};
use proptest::prelude::*;

fn any_config() -> impl Strategy<Value = SlugConfig> {
    (
        prop_oneof![Just("fa"), Just("ar"), Just("en")],
        prop_oneof![Just('-'), Just('_'), Just('.'), Just('~')],
        any::<bool>(),
    )
        .prop_map(|(language, separator, transliterate)| {
            let overrides = SlugOverrides::default()
                .with_language(language)
                .with_separator(separator)
                .with_transliterate(transliterate);
            SlugConfig::resolve(&overrides, &SlugDefaults::default())
        })
}

fn mixed_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![
            proptest::char::range('a', 'z'),
            proptest::char::range('A', 'Z'),
            proptest::char::range('0', '9'),
            proptest::char::range('\u{0600}', '\u{06FF}'),
            proptest::char::range('\u{0966}', '\u{096F}'),
            Just(' '),
            Just('_'),
            Just('-'),
            Just('.'),
            Just('\u{200C}'),
            Just('\u{200D}'),
            Just('\u{0640}'),
            Just('é'),
            Just('!'),
        ],
        0..64,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn transform_is_idempotent(input in mixed_text(), config in any_config()) {
        let once = transform(&input, &config);
        prop_assert_eq!(transform(&once, &config), once);
    }

    #[test]
    fn transform_is_deterministic(input in mixed_text(), config in any_config()) {
        prop_assert_eq!(transform(&input, &config), transform(&input, &config));
    }

    #[test]
    fn output_conforms_to_allow_list(input in mixed_text(), config in any_config()) {
        let slug = transform(&input, &config);
        let sep = config.separator;
        let doubled: String = [sep, sep].iter().collect();
        prop_assert!(!slug.starts_with(sep));
        prop_assert!(!slug.ends_with(sep));
        prop_assert!(!slug.contains(&doubled));
        let pattern = config.pattern();
        prop_assert!(slug.chars().all(|ch| pattern.allows(ch, sep)));
    }

    #[test]
    fn truncation_respects_limit(input in mixed_text(), config in any_config(), max in 1usize..20) {
        let slug = truncate(&transform(&input, &config), max, config.separator);
        prop_assert!(slug.chars().count() <= max);
        prop_assert!(!slug.ends_with(config.separator));
    }
}
