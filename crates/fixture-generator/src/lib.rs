//! Label/value stream generator for parser benchmark fixtures.
//!
//! This crate provides the [`StreamGenerator`], which writes a randomized
//! `label delimiter value` stream to any [`std::io::Write`] sink and
//! accumulates the per-label ground truth in the same pass. The generator
//! draws from a seeded [`SeededSampler`], so runs with the same seed and
//! configuration produce byte-identical output.
//!
//! # Architecture
//!
//! ```text
//! GeneratorConfig (fixture-core)
//!        │
//!        ▼
//! ┌───────────────────┐
//! │  StreamGenerator  │◄──── Sampler (SeededSampler / scripted)
//! │                   │
//! │  - entry count    │
//! │  - aggregates     │
//! └─────────┬─────────┘
//!           │
//!           ├──► "A = 56; B = -3; ..."   (io::Write sink)
//!           │
//!           ▼
//!    AggregateReport { label → { values, value } }
//! ```
//!
//! # Example
//!
//! ```rust
//! use fixture_core::{GeneratorConfig, SeedSource};
//! use fixture_generator::StreamGenerator;
//!
//! let config = GeneratorConfig::new(
//!     vec!["A".to_string(), "B".to_string()],
//!     5..=10,
//!     -100..=100,
//!     vec![" = ".to_string()],
//!     vec!["; ".to_string()],
//!     SeedSource::Fixed(42),
//! )
//! .unwrap();
//!
//! let mut out = Vec::new();
//! let output = StreamGenerator::new(&config).generate(&mut out).unwrap();
//! assert_eq!(output.aggregate.total_values(), output.entries);
//! ```

pub mod error;
pub mod generator;
pub mod sampler;

// Re-exports for convenience
pub use error::{WriteError, WriteStage};
pub use generator::{adjust_for_overflow, Entry, GenerateOutput, StreamGenerator};
pub use sampler::{Sampler, SeededSampler};
