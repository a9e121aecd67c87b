//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::Config;
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn extension_strategy() -> impl Strategy<Value = String> {
    "[a-z+]{1,4}".prop_map(|s| format!(".{s}"))
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(prop::collection::vec(extension_strategy(), 1..4)),
        prop::option::of(extension_strategy()),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(extensions, header, require)| Config {
            implementation_extensions: extensions,
            header_extension: header,
            require_implementation: require,
            ..Default::default()
        })
}

proptest! {
    /// Merging an empty config changes nothing
    #[test]
    fn prop_merge_empty_is_right_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    /// Merging into an empty config copies every value
    #[test]
    fn prop_merge_into_empty_copies_values(config in config_strategy()) {
        let mut merged = Config::default();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    /// Set fields in the source always win
    #[test]
    fn prop_merge_source_overwrites(base in config_strategy(), source in config_strategy()) {
        let mut merged = base.clone();
        ConfigMerger::merge_into(&mut merged, &source);
        if source.header_extension.is_some() {
            prop_assert_eq!(&merged.header_extension, &source.header_extension);
        } else {
            prop_assert_eq!(&merged.header_extension, &base.header_extension);
        }
        if source.require_implementation.is_some() {
            prop_assert_eq!(merged.require_implementation, source.require_implementation);
        }
    }

    /// Well-formed dotted extensions validate unless duplicated
    #[test]
    fn prop_dotted_extensions_validate(extensions in prop::collection::hash_set(extension_strategy(), 1..5)) {
        let config = Config {
            implementation_extensions: Some(extensions.into_iter().collect()),
            ..Default::default()
        };
        prop_assert!(ConfigValidator::validate(&config).is_ok());
    }
}
