//! Single-pass stream generator producing the fixture text and its aggregate.

use crate::error::{WriteError, WriteStage};
use crate::sampler::{Sampler, SeededSampler};
use fixture_core::{AggregateReport, GeneratorConfig, RunningAggregates};
use std::io::{self, Write};

/// One generated `label delimiter value` occurrence.
///
/// `separator` is drawn for every entry but only written when another entry
/// follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    pub label: &'a str,
    pub delimiter: &'a str,
    pub value: i32,
    pub separator: &'a str,
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct GenerateOutput {
    /// Per-label ground truth
    pub aggregate: AggregateReport,
    /// Number of entries written
    pub entries: u64,
    /// Number of bytes written to the sink
    pub bytes_written: u64,
    /// Seed the sampler was built from, if the generator owned one
    pub seed: Option<u64>,
}

/// Value actually written when the label's sum would pass `i32::MAX`.
///
/// Non-positive values are negated (with wraparound, so `i32::MIN` stays
/// `i32::MIN`); positive values are kept as they are. Positive values are
/// the only ones that can trigger the check on a sum still within range, so
/// this does not keep the narrowed sum from wrapping. The behavior is kept
/// as-is for output parity with existing fixtures.
pub fn adjust_for_overflow(value: i32) -> i32 {
    if value <= 0 {
        value.wrapping_neg()
    } else {
        value
    }
}

/// Generator for one run over a validated configuration.
///
/// The random draw order per entry is fixed: delimiter index, label index,
/// separator index, then value. The entry count is drawn once up front.
pub struct StreamGenerator<'a, S = SeededSampler> {
    config: &'a GeneratorConfig,
    sampler: S,
    seed: Option<u64>,
}

impl<'a> StreamGenerator<'a, SeededSampler> {
    /// Create a generator, resolving the configuration's seed source once.
    pub fn new(config: &'a GeneratorConfig) -> Self {
        let seed = config.seed().resolve();
        Self {
            config,
            sampler: SeededSampler::new(seed),
            seed: Some(seed),
        }
    }
}

impl<'a, S: Sampler> StreamGenerator<'a, S> {
    /// Create a generator drawing from the given sampler.
    pub fn with_sampler(config: &'a GeneratorConfig, sampler: S) -> Self {
        Self {
            config,
            sampler,
            seed: None,
        }
    }

    /// Resolved seed, when the generator built its own sampler.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Draw the next entry and account it in `aggregates`.
    fn next_entry(&mut self, aggregates: &mut RunningAggregates) -> Entry<'a> {
        let config = self.config;

        let delimiter = &config.delimiters()[self.sampler.pick_index(config.delimiters().len())];
        let label_index = self.sampler.pick_index(config.labels().len());
        let separator = &config.separators()[self.sampler.pick_index(config.separators().len())];

        let mut value = self.sampler.pick_value(config.min_val(), config.max_val());
        if aggregates.would_overflow(label_index, value) {
            value = adjust_for_overflow(value);
        }
        aggregates.record(label_index, value);

        Entry {
            label: &config.labels()[label_index],
            delimiter,
            value,
            separator,
        }
    }

    /// Write the full stream to `out` and return the aggregate.
    ///
    /// The sink is written to directly; wrap it in a `BufWriter` for files.
    /// The first write error aborts the run.
    pub fn generate<W: Write>(mut self, out: W) -> Result<GenerateOutput, WriteError> {
        let config = self.config;
        let entries = self
            .sampler
            .pick_count(config.min_values(), config.max_values());

        let mut aggregates = RunningAggregates::new(config.labels().len());
        let mut out = CountingWriter::new(out);

        for i in 0..entries {
            let entry = self.next_entry(&mut aggregates);

            out.write_part(WriteStage::Label, entry.label.as_bytes())?;
            out.write_part(WriteStage::Delimiter, entry.delimiter.as_bytes())?;
            out.write_value(entry.value)?;

            if i + 1 == entries {
                break;
            }

            out.write_part(WriteStage::Separator, entry.separator.as_bytes())?;
        }

        Ok(GenerateOutput {
            aggregate: aggregates.finish(config.labels()),
            entries,
            bytes_written: out.written,
            seed: self.seed,
        })
    }
}

/// Writer wrapper counting bytes accepted by the inner sink.
struct CountingWriter<W> {
    inner: W,
    written: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, written: 0 }
    }

    fn write_part(&mut self, stage: WriteStage, bytes: &[u8]) -> Result<(), WriteError> {
        self.write_all(bytes).map_err(|source| self.error(stage, source))
    }

    fn write_value(&mut self, value: i32) -> Result<(), WriteError> {
        write!(self, "{value}").map_err(|source| self.error(WriteStage::Value, source))
    }

    fn error(&self, stage: WriteStage, source: io::Error) -> WriteError {
        WriteError {
            stage,
            bytes_written: self.written,
            source,
        }
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
