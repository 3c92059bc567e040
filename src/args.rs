//! CLI argument definitions.

use crate::output::AggregateFormat;
use clap::Args;
use std::path::PathBuf;

/// Arguments shared by every command that reads a configuration file.
#[derive(Args, Clone, Debug)]
pub struct ConfigArgs {
    /// Generator configuration TOML file path
    #[arg(long, short = 'c', default_value = "./generate-conf.toml")]
    pub config: PathBuf,

    /// Seed overriding `time-seed` / `random-seed` from the config file
    #[arg(long, env = "FIXTURE_GEN_SEED")]
    pub seed: Option<u64>,
}

/// Arguments for the `generate` command.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output file path for the generated fixture
    #[arg(long, short = 'o', default_value = "./out.txt")]
    pub output: PathBuf,

    /// Aggregate output file path
    #[arg(long, short = 'a', default_value = "./aggregate.json")]
    pub aggregate: PathBuf,

    /// Aggregate file format (inferred from the file extension if omitted)
    #[arg(long, value_enum)]
    pub format: Option<AggregateFormat>,
}

impl GenerateArgs {
    /// Effective aggregate format.
    pub fn aggregate_format(&self) -> AggregateFormat {
        self.format
            .unwrap_or_else(|| AggregateFormat::from_path(&self.aggregate))
    }
}
