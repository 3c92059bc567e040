//! Configuration loading for the command-line tool.

pub mod file;

pub use file::{FileConfig, DEFAULT_DELIMITER, DEFAULT_SEPARATOR};
