//! DXA Processor Library
//!
//! Converts exports from DXA (bone density / body composition) scanners
//! into structured records and writes them as JSON or rectangular CSV.
//!
//! This library provides tools for:
//! - Decoding UTF-16 exports with a mandatory byte order mark
//! - Detecting the scan modality from the header row
//! - Extracting numeric tokens from noisy tab-delimited cells
//! - Building typed body composition, total body and core scan records
//! - Flattening variable-width records into a rectangular CSV table

pub mod cli;
pub mod config;
pub mod constants;
pub mod decoder;
pub mod error;
pub mod header;
pub mod measurement;
pub mod models;
pub mod numeric;
pub mod parser;
pub mod processor;
pub mod tabular;

// Re-export commonly used types
pub use config::{ConverterConfig, HeaderStyle, OutputFormat};
pub use error::{DxaError, Result, RowError};
pub use measurement::Measurement;
pub use models::{
    BodyCompositionRecord, CoreScanRecord, Modality, ParseStats, ParsedFile, Record, Records,
    TotalBodyRecord,
};
pub use processor::{
    ConversionSummary, convert_file, parse_bytes, parse_file, parse_reader, write_output,
};
