//! Configuration builder combining every source.

use std::env;
use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};

/// Builds the effective configuration from defaults, files, environment
/// and programmatic overrides.
///
/// # Examples
///
/// ```
/// use srcmerge::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         require_implementation: Some(true),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert!(config.effective_require_implementation());
/// assert_eq!(config.effective_implementation_extensions(), vec![".c"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder with every source enabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory project config discovery starts from (default: cwd).
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Directory holding the user `config.yaml` (default: `~/.srcmerge`).
    #[must_use]
    pub fn with_user_dir(mut self, dir: &Path) -> Self {
        self.user_dir = Some(dir.to_path_buf());
        self
    }

    /// An explicit configuration file, applied above discovered files.
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    /// Do not load any configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not apply `SRCMERGE_*` environment overrides.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Build and validate the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed,
    /// an environment value is invalid, or the result fails validation.
    pub fn build(self) -> Result<Config> {
        let mut sources = Vec::new();

        if !self.skip_files {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir().map_err(Error::Io)?,
            };
            sources.extend(ConfigLoader::load_all(&working_dir, self.user_dir.as_deref())?);
        }

        if let Some(path) = self.config_file {
            let config = ConfigLoader::load_file(&path)?;
            sources.push(ConfigSource {
                path,
                precedence: 3,
                config,
            });
        }

        for source in &sources {
            log::debug!("loaded configuration from {}", source.path.display());
        }

        let mut config = ConfigMerger::merge(Config::with_defaults(), sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_build_defaults_only() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::with_defaults());
    }

    #[test]
    fn test_build_project_file() {
        let project = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        fs::write(
            project.path().join("srcmerge.yaml"),
            "implementation_extensions: [\".cc\"]\n",
        )
        .unwrap();

        let config = ConfigBuilder::new()
            .with_working_dir(project.path())
            .with_user_dir(user.path())
            .skip_env()
            .build()
            .unwrap();
        assert_eq!(config.effective_implementation_extensions(), vec![".cc"]);
        assert_eq!(config.effective_header_extension(), ".h");
    }

    #[test]
    fn test_build_explicit_file_beats_project() {
        let project = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        fs::write(project.path().join("srcmerge.yaml"), "header_extension: \".p\"\n").unwrap();
        let explicit = project.path().join("custom.yaml");
        fs::write(&explicit, "header_extension: \".x\"\n").unwrap();

        let config = ConfigBuilder::new()
            .with_working_dir(project.path())
            .with_user_dir(user.path())
            .with_config_file(&explicit)
            .skip_env()
            .build()
            .unwrap();
        assert_eq!(config.effective_header_extension(), ".x");
    }

    #[test]
    fn test_build_overrides_win() {
        let config = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                header_extension: Some(".hpp".to_string()),
                ..Default::default()
            })
            .build()
            .unwrap();
        assert_eq!(config.effective_header_extension(), ".hpp");
    }

    #[test]
    fn test_build_rejects_invalid() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                implementation_extensions: Some(vec![]),
                ..Default::default()
            })
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_build_missing_explicit_file() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config_file(Path::new("/nonexistent/srcmerge.yaml"))
            .build();
        assert!(result.is_err());
    }
}
