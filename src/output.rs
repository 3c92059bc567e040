//! Output files: the generated fixture stream and the rendered aggregate.

use anyhow::Context;
use clap::ValueEnum;
use fixture_core::AggregateReport;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default buffer size for output files.
pub const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Rendering format for the aggregate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AggregateFormat {
    Json,
    Yaml,
}

impl AggregateFormat {
    /// Pick a format from the file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                AggregateFormat::Yaml
            }
            _ => AggregateFormat::Json,
        }
    }
}

/// Create (or truncate) a file and wrap it in a buffered writer.
pub fn create_buffered(path: &Path) -> anyhow::Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("Failed to open output file: {}", path.display()))?;
    Ok(BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file))
}

/// Flush a buffered file writer and sync it to disk.
pub fn finish_buffered(writer: BufWriter<File>, path: &Path) -> anyhow::Result<()> {
    let file = writer
        .into_inner()
        .map_err(|e| e.into_error())
        .with_context(|| format!("Failed to flush output file buffer: {}", path.display()))?;
    file.sync_all()
        .with_context(|| format!("Failed to sync output file: {}", path.display()))?;
    Ok(())
}

/// Render the aggregate to `out`.
///
/// JSON is pretty-printed with two-space indentation and ends with a newline.
pub fn render_aggregate<W: Write>(
    report: &AggregateReport,
    format: AggregateFormat,
    mut out: W,
) -> anyhow::Result<()> {
    match format {
        AggregateFormat::Json => {
            serde_json::to_writer_pretty(&mut out, report)?;
            out.write_all(b"\n")?;
        }
        AggregateFormat::Yaml => serde_yaml::to_writer(&mut out, report)?,
    }
    Ok(())
}

/// Write the aggregate file at `path`.
pub fn write_aggregate(
    report: &AggregateReport,
    path: &Path,
    format: AggregateFormat,
) -> anyhow::Result<()> {
    let mut writer = create_buffered(path)?;
    render_aggregate(report, format, &mut writer)
        .with_context(|| format!("Failed to write aggregate file: {}", path.display()))?;
    finish_buffered(writer, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixture_core::RunningAggregates;

    fn report() -> AggregateReport {
        let mut running = RunningAggregates::new(2);
        running.record(0, 56);
        running.record(0, -3);
        running.record(1, -700);
        running.finish(&["A".to_string(), "B".to_string()])
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            AggregateFormat::from_path(Path::new("aggregate.json")),
            AggregateFormat::Json
        );
        assert_eq!(
            AggregateFormat::from_path(Path::new("out/aggregate.YML")),
            AggregateFormat::Yaml
        );
        assert_eq!(
            AggregateFormat::from_path(Path::new("aggregate.yaml")),
            AggregateFormat::Yaml
        );
        assert_eq!(
            AggregateFormat::from_path(Path::new("aggregate")),
            AggregateFormat::Json
        );
    }

    #[test]
    fn test_render_json() {
        let mut out = Vec::new();
        render_aggregate(&report(), AggregateFormat::Json, &mut out).unwrap();

        let expected = r#"{
  "A": {
    "values": 2,
    "value": 53
  },
  "B": {
    "values": 1,
    "value": -700
  }
}
"#;
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_render_yaml() {
        let mut out = Vec::new();
        render_aggregate(&report(), AggregateFormat::Yaml, &mut out).unwrap();

        let parsed: AggregateReport = serde_yaml::from_slice(&out).unwrap();
        assert_eq!(parsed, report());
    }

    #[test]
    fn test_write_aggregate_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aggregate.json");

        write_aggregate(&report(), &path, AggregateFormat::Json).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: AggregateReport = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, report());
    }
}
