//! fixture-gen library
//!
//! Generates label/value fixture files for benchmarking independent parser
//! implementations, together with the ground-truth aggregate each parser is
//! expected to reproduce.
//!
//! # Features
//!
//! - Reproducible output: same configuration and seed, byte-identical files
//! - Configurable labels, entry counts, value range, delimiters and separators
//! - Per-label count and 32-bit sum written as JSON or YAML
//!
//! # Crates
//!
//! - `fixture_core` - validated configuration and aggregate types
//! - `fixture_generator` - uniform sampler and stream generator
//!
//! # CLI Usage
//!
//! ```bash
//! # Generate out.txt and aggregate.json from generate-conf.toml
//! fixture-gen generate -c generate-conf.toml -o out.txt -a aggregate.json
//!
//! # Check a configuration file without generating anything
//! fixture-gen validate -c generate-conf.toml
//! ```

pub mod args;
pub mod config;
pub mod generate;
pub mod output;

pub use args::{ConfigArgs, GenerateArgs};
pub use config::FileConfig;
pub use output::AggregateFormat;
