//! TOML generator configuration file.
//!
//! ```toml
//! time-seed = false
//! random-seed = 42
//! labels = ["A", "B", "C"]
//! min-values = 1
//! max-values = 1000
//! min-val = -1000
//! max-val = 1000
//! delimiters = [" = ", ": "]
//! separators = ["; ", "\n"]
//! ```
//!
//! Missing keys fall back to zero/empty values, so an incomplete file is
//! rejected by validation rather than by the parser. Empty `delimiters` and
//! `separators` lists get [`DEFAULT_DELIMITER`] and [`DEFAULT_SEPARATOR`].

use anyhow::Context;
use fixture_core::{GeneratorConfig, SeedSource};
use serde::Deserialize;
use std::path::Path;

/// Delimiter used when the file lists none.
pub const DEFAULT_DELIMITER: &str = " = ";

/// Separator used when the file lists none.
pub const DEFAULT_SEPARATOR: &str = "; ";

/// Raw configuration as stored on disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    /// Derive the seed from the current time instead of `random-seed`
    pub time_seed: bool,
    /// Explicit seed; negative values are reinterpreted as unsigned
    pub random_seed: i64,
    pub labels: Vec<String>,
    pub min_values: u64,
    pub max_values: u64,
    pub min_val: i32,
    pub max_val: i32,
    pub delimiters: Vec<String>,
    pub separators: Vec<String>,
}

impl FileConfig {
    /// Read and parse a configuration file without validating it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse a configuration from a TOML string without validating it.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Seed source selected by `time-seed` / `random-seed`.
    pub fn seed_source(&self) -> SeedSource {
        if self.time_seed {
            SeedSource::Time
        } else {
            SeedSource::Fixed(self.random_seed as u64)
        }
    }

    /// Apply defaults and validate into a [`GeneratorConfig`].
    pub fn into_generator_config(self) -> anyhow::Result<GeneratorConfig> {
        let seed = self.seed_source();
        let delimiters = if self.delimiters.is_empty() {
            vec![DEFAULT_DELIMITER.to_string()]
        } else {
            self.delimiters
        };
        let separators = if self.separators.is_empty() {
            vec![DEFAULT_SEPARATOR.to_string()]
        } else {
            self.separators
        };

        let config = GeneratorConfig::new(
            self.labels,
            self.min_values..=self.max_values,
            self.min_val..=self.max_val,
            delimiters,
            separators,
            seed,
        )?;
        Ok(config)
    }

    /// Load, default and validate a configuration file in one step.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<GeneratorConfig> {
        let path = path.as_ref();
        Self::from_file(path)?
            .into_generator_config()
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixture_core::ConfigError;

    const FULL: &str = r#"
time-seed = false
random-seed = 42
labels = ["A", "B", "C"]
min-values = 10
max-values = 100
min-val = -1000
max-val = 1000
delimiters = [" = ", ":"]
separators = ["; ", "\n"]
"#;

    #[test]
    fn test_parse_full_config() {
        let file = FileConfig::from_toml(FULL).unwrap();
        assert_eq!(file.labels, vec!["A", "B", "C"]);
        assert_eq!(file.separators, vec!["; ", "\n"]);

        let config = file.into_generator_config().unwrap();
        assert_eq!(config.min_values(), 10);
        assert_eq!(config.max_values(), 100);
        assert_eq!(config.min_val(), -1000);
        assert_eq!(config.max_val(), 1000);
        assert_eq!(config.delimiters(), &[" = ", ":"]);
        assert_eq!(config.seed(), SeedSource::Fixed(42));
    }

    #[test]
    fn test_defaults_for_delimiters_and_separators() {
        let config = FileConfig::from_toml(
            r#"
labels = ["A"]
min-values = 1
max-values = 1
"#,
        )
        .unwrap()
        .into_generator_config()
        .unwrap();

        assert_eq!(config.delimiters(), &[DEFAULT_DELIMITER]);
        assert_eq!(config.separators(), &[DEFAULT_SEPARATOR]);
        assert_eq!(config.min_val(), 0);
        assert_eq!(config.max_val(), 0);
        assert_eq!(config.seed(), SeedSource::Fixed(0));
    }

    #[test]
    fn test_time_seed() {
        let file = FileConfig::from_toml("time-seed = true\nrandom-seed = 5").unwrap();
        assert_eq!(file.seed_source(), SeedSource::Time);
    }

    #[test]
    fn test_negative_seed_is_reinterpreted() {
        let file = FileConfig::from_toml("random-seed = -1").unwrap();
        assert_eq!(file.seed_source(), SeedSource::Fixed(u64::MAX));
    }

    #[test]
    fn test_empty_file_fails_validation() {
        let err = FileConfig::from_toml("")
            .unwrap()
            .into_generator_config()
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::TooFewValues(0))
        );
    }

    #[test]
    fn test_invalid_label_is_reported() {
        let err = FileConfig::from_toml(
            r#"
labels = ["A", "B B"]
min-values = 1
max-values = 2
"#,
        )
        .unwrap()
        .into_generator_config()
        .unwrap_err();
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::LabelContainsWhitespace { index: 1 })
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(FileConfig::from_toml("labels = [\"A\"]\nmax-value = 3").is_err());
    }

    #[test]
    fn test_out_of_range_value_rejected() {
        assert!(FileConfig::from_toml("max-val = 3000000000").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("generate-conf.toml");
        std::fs::write(&path, FULL).unwrap();

        let config = FileConfig::load(&path).unwrap();
        assert_eq!(config.labels().len(), 3);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read config file"));
    }
}
