//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use srcmerge::config::{Config, ConfigMerger};
///
/// let low = Config { header_extension: Some(".h".to_string()), ..Default::default() };
/// let high = Config { header_extension: Some(".hpp".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.header_extension, Some(".hpp".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources onto `base`.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(base: Config, sources: Vec<ConfigSource>) -> Config {
        let mut result = base;
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Every field is replaced wholesale when the source sets it. The
    /// extension list is not accumulated: its order is a priority order, so
    /// a higher-precedence list replaces a lower one.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.implementation_extensions.is_some() {
            target
                .implementation_extensions
                .clone_from(&source.implementation_extensions);
        }

        if source.header_extension.is_some() {
            target.header_extension.clone_from(&source.header_extension);
        }

        if source.once_guard.is_some() {
            target.once_guard.clone_from(&source.once_guard);
        }

        if source.require_implementation.is_some() {
            target.require_implementation = source.require_implementation;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn make_source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("/config/{precedence}.yaml")),
            precedence,
            config,
        }
    }

    #[test]
    fn test_merge_overwrites() {
        let mut target = Config::with_defaults();
        let source = Config {
            implementation_extensions: Some(vec![".cc".to_string()]),
            require_implementation: Some(true),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &source);
        assert_eq!(
            target.implementation_extensions,
            Some(vec![".cc".to_string()])
        );
        assert_eq!(target.require_implementation, Some(true));
    }

    #[test]
    fn test_merge_none_values_dont_overwrite() {
        let mut target = Config::with_defaults();
        ConfigMerger::merge_into(&mut target, &Config::default());
        assert_eq!(target, Config::with_defaults());
    }

    #[test]
    fn test_merge_multiple_sources() {
        let sources = vec![
            make_source(
                1,
                Config {
                    header_extension: Some(".user".to_string()),
                    once_guard: Some("#pragma once".to_string()),
                    ..Default::default()
                },
            ),
            make_source(
                2,
                Config {
                    header_extension: Some(".project".to_string()),
                    ..Default::default()
                },
            ),
        ];

        let merged = ConfigMerger::merge(Config::default(), sources);
        assert_eq!(merged.header_extension, Some(".project".to_string()));
        assert_eq!(merged.once_guard, Some("#pragma once".to_string()));
    }
}
