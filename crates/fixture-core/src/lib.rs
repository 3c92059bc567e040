//! Core types for the fixture-gen framework.
//!
//! This crate provides the foundational types shared by the generator and
//! the command-line tool:
//!
//! - [`GeneratorConfig`] - Validated, immutable generation parameters
//! - [`SeedSource`] - Explicit seed or time-derived seed
//! - [`RunningAggregates`] - Per-label count/sum accumulated during a run
//! - [`AggregateReport`] - Final per-label ground truth handed to serializers
//!
//! # Architecture
//!
//! ```text
//! fixture-core (this crate)
//!    │
//!    ├─── fixture-generator  (sampler + stream generator)
//!    │
//!    └─── fixture-gen        (TOML loading, CLI, file output)
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{GeneratorConfig, SeedSource};
//!
//! let config = GeneratorConfig::new(
//!     vec!["A".to_string(), "B".to_string()],
//!     1..=100,
//!     -1000..=1000,
//!     vec![" = ".to_string()],
//!     vec!["; ".to_string()],
//!     SeedSource::Fixed(42),
//! )
//! .unwrap();
//!
//! assert_eq!(config.labels().len(), 2);
//! ```

pub mod aggregate;
pub mod config;

// Re-exports for convenience
pub use aggregate::{narrow_i32, Aggregate, AggregateReport, RunningAggregates};
pub use config::{ConfigError, GeneratorConfig, SeedSource};
