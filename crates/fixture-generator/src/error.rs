//! Error types for the stream generator.

use std::fmt;
use thiserror::Error;

/// The part of an entry that was being written when output failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStage {
    Label,
    Delimiter,
    Value,
    Separator,
}

impl fmt::Display for WriteStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self {
            WriteStage::Label => "label",
            WriteStage::Delimiter => "delimiter",
            WriteStage::Value => "value",
            WriteStage::Separator => "separator",
        };
        f.write_str(stage)
    }
}

/// Output failed partway through a run.
///
/// Whatever was written before the failure stays in the sink.
#[derive(Error, Debug)]
#[error("writing {stage} after {bytes_written} bytes: {source}")]
pub struct WriteError {
    /// Stage that failed
    pub stage: WriteStage,
    /// Bytes accepted by the sink before the failure
    pub bytes_written: u64,
    /// Underlying IO error
    #[source]
    pub source: std::io::Error,
}
