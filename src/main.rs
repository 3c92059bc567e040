//! Command-line interface for fixture-gen
//!
//! # Usage Examples
//!
//! ```bash
//! # Generate with the seed from the config file
//! fixture-gen generate \
//!   --config generate-conf.toml \
//!   --output out.txt \
//!   --aggregate aggregate.json
//!
//! # Override the seed and write the aggregate as YAML
//! fixture-gen generate -c generate-conf.toml --seed 7 -a aggregate.yaml
//!
//! # Validate a config file
//! fixture-gen validate -c generate-conf.toml
//! ```
//!
//! Set `RUST_LOG=info` to see progress output.

use clap::{Parser, Subcommand};
use fixture_gen::generate::{run_generate, run_validate};
use fixture_gen::{ConfigArgs, GenerateArgs};

#[derive(Parser)]
#[command(name = "fixture-gen")]
#[command(about = "Generate label/value parser benchmark fixtures with ground-truth aggregates")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a fixture file and its aggregate file
    Generate(GenerateArgs),

    /// Load and validate a configuration file without generating
    Validate(ConfigArgs),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => {
            run_generate(&args)?;
        }
        Commands::Validate(args) => {
            run_validate(&args)?;
        }
    }

    Ok(())
}
