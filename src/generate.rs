//! Command handlers for `generate` and `validate`.

use crate::args::{ConfigArgs, GenerateArgs};
use crate::config::FileConfig;
use crate::output::{create_buffered, finish_buffered, write_aggregate};
use anyhow::Context;
use fixture_core::{GeneratorConfig, SeedSource};
use fixture_generator::{GenerateOutput, StreamGenerator};
use std::time::Instant;

/// Load the configuration file and apply the CLI seed override.
pub fn load_config(args: &ConfigArgs) -> anyhow::Result<GeneratorConfig> {
    let config = FileConfig::load(&args.config)?;
    Ok(match args.seed {
        Some(seed) => config.with_seed(SeedSource::Fixed(seed)),
        None => config,
    })
}

/// Run the generate command.
pub fn run_generate(args: &GenerateArgs) -> anyhow::Result<GenerateOutput> {
    let config = load_config(&args.config)?;
    tracing::debug!("Loaded config from {}", args.config.config.display());

    let start = Instant::now();
    let mut writer = create_buffered(&args.output)?;

    let generator = StreamGenerator::new(&config);
    if let Some(seed) = generator.seed() {
        tracing::info!("Generating with seed {}", seed);
    }

    let output = generator
        .generate(&mut writer)
        .with_context(|| format!("Failed to generate fixture: {}", args.output.display()))?;
    finish_buffered(writer, &args.output)?;

    tracing::info!(
        "{} bytes written to {} ({} entries, {:?})",
        output.bytes_written,
        args.output.display(),
        output.entries,
        start.elapsed()
    );

    write_aggregate(&output.aggregate, &args.aggregate, args.aggregate_format())?;
    tracing::info!("Aggregate file written to {}", args.aggregate.display());

    Ok(output)
}

/// Run the validate command.
pub fn run_validate(args: &ConfigArgs) -> anyhow::Result<GeneratorConfig> {
    let config = load_config(args)?;

    tracing::info!(
        "Config {} is valid: {} labels, {}..={} entries, values {}..={}, {} delimiters, {} separators",
        args.config.display(),
        config.labels().len(),
        config.min_values(),
        config.max_values(),
        config.min_val(),
        config.max_val(),
        config.delimiters().len(),
        config.separators().len()
    );
    match config.seed() {
        SeedSource::Fixed(seed) => tracing::info!("Seed: {}", seed),
        SeedSource::Time => tracing::info!("Seed: derived from current time"),
    }

    Ok(config)
}
