//! Generator configuration model.
//!
//! A [`GeneratorConfig`] can only be obtained through [`GeneratorConfig::new`],
//! which runs every validation rule. Downstream code (sampler, generator,
//! reporter) relies on these invariants and never re-checks them.

use std::collections::HashSet;
use std::ops::RangeInclusive;

// ============================================================================
// Error Types
// ============================================================================

/// Error returned when generation parameters are invalid.
///
/// Each variant names the rule that failed. Index fields refer to the
/// position of the offending entry in the list as it was supplied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Lower bound of the entry count is zero
    #[error("min-values ({0}) too small, must be at least 1")]
    TooFewValues(u64),

    /// Upper bound of the entry count is below the lower bound
    #[error("max-values ({max}) smaller than min-values ({min})")]
    ValueCountRange { min: u64, max: u64 },

    /// Upper bound of the value range is below the lower bound
    #[error("max-val ({max}) smaller than min-val ({min})")]
    ValueRange { min: i32, max: i32 },

    /// No labels were supplied
    #[error("missing labels")]
    MissingLabels,

    /// A label is the empty string
    #[error("invalid label (empty) at index {index}")]
    EmptyLabel { index: usize },

    /// A label appears more than once
    #[error("duplicate label ({label:?}) at index {index}")]
    DuplicateLabel { index: usize, label: String },

    /// A label contains a whitespace character
    #[error("label at index {index} contains whitespace")]
    LabelContainsWhitespace { index: usize },

    /// No delimiters were supplied
    #[error("missing delimiters")]
    MissingDelimiters,

    /// A delimiter is the empty string
    #[error("invalid delimiter (empty) at index {index}")]
    EmptyDelimiter { index: usize },

    /// A delimiter appears more than once
    #[error("duplicate delimiter ({delimiter:?}) at index {index}")]
    DuplicateDelimiter { index: usize, delimiter: String },

    /// No separators were supplied
    #[error("missing separators")]
    MissingSeparators,

    /// A separator is the empty string
    #[error("invalid separator (empty) at index {index}")]
    EmptySeparator { index: usize },

    /// A separator appears more than once
    #[error("duplicate separator ({separator:?}) at index {index}")]
    DuplicateSeparator { index: usize, separator: String },
}

// ============================================================================
// Seed
// ============================================================================

/// Where the generator's seed comes from.
///
/// Only [`SeedSource::Fixed`] makes a run reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedSource {
    /// Explicit seed
    Fixed(u64),
    /// Current Unix time in whole seconds, resolved when generation starts
    Time,
}

impl SeedSource {
    /// Resolve the seed to a concrete value.
    pub fn resolve(&self) -> u64 {
        match self {
            SeedSource::Fixed(seed) => *seed,
            SeedSource::Time => chrono::Utc::now().timestamp() as u64,
        }
    }
}

impl Default for SeedSource {
    fn default() -> Self {
        SeedSource::Fixed(0)
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Validated generation parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    labels: Vec<String>,
    min_values: u64,
    max_values: u64,
    min_val: i32,
    max_val: i32,
    delimiters: Vec<String>,
    separators: Vec<String>,
    seed: SeedSource,
}

impl GeneratorConfig {
    /// Validate the parameters and build a configuration.
    ///
    /// Rules are checked in a fixed order and the first failure is returned:
    /// entry count bounds, value bounds, label presence, delimiters, labels,
    /// separators.
    pub fn new(
        labels: Vec<String>,
        value_count_range: RangeInclusive<u64>,
        value_range: RangeInclusive<i32>,
        delimiters: Vec<String>,
        separators: Vec<String>,
        seed: SeedSource,
    ) -> Result<Self, ConfigError> {
        let (min_values, max_values) = value_count_range.into_inner();
        let (min_val, max_val) = value_range.into_inner();

        if min_values < 1 {
            return Err(ConfigError::TooFewValues(min_values));
        }
        if max_values < min_values {
            return Err(ConfigError::ValueCountRange {
                min: min_values,
                max: max_values,
            });
        }
        if max_val < min_val {
            return Err(ConfigError::ValueRange {
                min: min_val,
                max: max_val,
            });
        }
        if labels.is_empty() {
            return Err(ConfigError::MissingLabels);
        }

        validate_delimiters(&delimiters)?;
        validate_labels(&labels)?;
        validate_separators(&separators)?;

        Ok(Self {
            labels,
            min_values,
            max_values,
            min_val,
            max_val,
            delimiters,
            separators,
            seed,
        })
    }

    /// Labels in configuration order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Minimum number of entries per run (at least 1).
    pub fn min_values(&self) -> u64 {
        self.min_values
    }

    /// Maximum number of entries per run.
    pub fn max_values(&self) -> u64 {
        self.max_values
    }

    /// Smallest value that can be drawn.
    pub fn min_val(&self) -> i32 {
        self.min_val
    }

    /// Largest value that can be drawn.
    pub fn max_val(&self) -> i32 {
        self.max_val
    }

    pub fn delimiters(&self) -> &[String] {
        &self.delimiters
    }

    pub fn separators(&self) -> &[String] {
        &self.separators
    }

    pub fn seed(&self) -> SeedSource {
        self.seed
    }

    /// Same configuration with a different seed source.
    ///
    /// Seeds take part in no validation rule, so this cannot fail.
    pub fn with_seed(mut self, seed: SeedSource) -> Self {
        self.seed = seed;
        self
    }
}

fn validate_delimiters(delimiters: &[String]) -> Result<(), ConfigError> {
    if delimiters.is_empty() {
        return Err(ConfigError::MissingDelimiters);
    }
    let mut seen = HashSet::with_capacity(delimiters.len());
    for (index, delimiter) in delimiters.iter().enumerate() {
        if delimiter.is_empty() {
            return Err(ConfigError::EmptyDelimiter { index });
        }
        if !seen.insert(delimiter.as_str()) {
            return Err(ConfigError::DuplicateDelimiter {
                index,
                delimiter: delimiter.clone(),
            });
        }
    }
    Ok(())
}

fn validate_labels(labels: &[String]) -> Result<(), ConfigError> {
    let mut seen = HashSet::with_capacity(labels.len());
    for (index, label) in labels.iter().enumerate() {
        if label.is_empty() {
            return Err(ConfigError::EmptyLabel { index });
        }
        if !seen.insert(label.as_str()) {
            return Err(ConfigError::DuplicateLabel {
                index,
                label: label.clone(),
            });
        }
        if label.chars().any(char::is_whitespace) {
            return Err(ConfigError::LabelContainsWhitespace { index });
        }
    }
    Ok(())
}

fn validate_separators(separators: &[String]) -> Result<(), ConfigError> {
    if separators.is_empty() {
        return Err(ConfigError::MissingSeparators);
    }
    let mut seen = HashSet::with_capacity(separators.len());
    for (index, separator) in separators.iter().enumerate() {
        if separator.is_empty() {
            return Err(ConfigError::EmptySeparator { index });
        }
        if !seen.insert(separator.as_str()) {
            return Err(ConfigError::DuplicateSeparator {
                index,
                separator: separator.clone(),
            });
        }
    }
    Ok(())
}
