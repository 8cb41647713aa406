//! File driver for scanner exports.
//!
//! Orchestrates one conversion end to end: decode the UTF-16 payload,
//! classify the file from its first non-blank line, parse every later
//! non-blank line under that modality, and accumulate the typed records.
//! Any fatal condition discards everything parsed so far.

pub mod writer;

#[cfg(test)]
pub mod tests;

use self::writer::OutputWriter;

use crate::config::ConverterConfig;
use crate::decoder::decode_utf16;
use crate::error::{DxaError, Result};
use crate::header::require_modality;
use crate::models::{ParseStats, ParsedFile, Records};
use crate::parser::{LineOutcome, SkipReason, parse_line};

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

/// Parse raw export bytes
pub fn parse_bytes(bytes: &[u8]) -> Result<ParsedFile> {
    let text = decode_utf16(bytes)?;
    parse_text(&text)
}

/// Read a stream to the end and parse it
pub fn parse_reader<R: Read>(mut reader: R) -> Result<ParsedFile> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    parse_bytes(&bytes)
}

/// Read and parse an export file from disk
pub fn parse_file(path: &Path) -> Result<ParsedFile> {
    if !path.exists() {
        return Err(DxaError::InputNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path)?;
    debug!("Read {} bytes from {}", bytes.len(), path.display());
    parse_bytes(&bytes)
}

/// Parse already-decoded export text
pub fn parse_text(text: &str) -> Result<ParsedFile> {
    let mut stats = ParseStats::default();
    let mut lines = text.lines().enumerate();

    // Awaiting header: the first non-blank line fixes the modality
    let header = loop {
        match lines.next() {
            Some((_, raw)) => {
                stats.lines_read += 1;
                let line = raw.trim();
                if line.is_empty() {
                    stats.blank_lines += 1;
                    continue;
                }
                break line;
            }
            None => return Err(DxaError::EmptyFile),
        }
    };

    let modality = require_modality(header)?;
    let mut records = Records::for_modality(modality).ok_or_else(|| DxaError::UnknownModality {
        header: header.to_string(),
    })?;

    // Accumulating rows
    for (index, raw) in lines {
        let line_number = index + 1;
        stats.lines_read += 1;

        let line = raw.trim();
        if line.is_empty() {
            stats.blank_lines += 1;
            continue;
        }

        match parse_line(modality, line) {
            Ok(LineOutcome::Parsed(record)) => {
                records.push(record)?;
                stats.rows_accepted += 1;
            }
            Ok(LineOutcome::Skipped(reason)) => {
                debug!("Skipping line {}: {:?}", line_number, reason);
                match reason {
                    SkipReason::TooFewFields => stats.rows_skipped_short += 1,
                    SkipReason::NoNumericValues => stats.rows_skipped_no_values += 1,
                }
            }
            Err(source) => {
                return Err(DxaError::Row {
                    line: line_number,
                    source,
                });
            }
        }
    }

    info!(
        "Parsed {} export: {} records, {} rows skipped",
        modality,
        stats.rows_accepted,
        stats.rows_skipped()
    );

    Ok(ParsedFile {
        modality,
        records,
        stats,
    })
}

/// Summary of a completed file conversion
#[derive(Debug, Clone)]
pub struct ConversionSummary {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub parsed: ParsedFile,
    pub bytes_written: u64,
    pub processing_time_ms: u128,
}

/// Convert one export file to the configured output.
///
/// The input is parsed completely before the output file is created, so a
/// failed parse never leaves a partial or empty output behind.
pub fn convert_file(input: &Path, config: &ConverterConfig) -> Result<ConversionSummary> {
    let start_time = Instant::now();
    let parsed = parse_file(input)?;
    write_output(input, parsed, config, start_time)
}

/// Write an already parsed file to the output configured for `input`
pub fn write_output(
    input: &Path,
    parsed: ParsedFile,
    config: &ConverterConfig,
    start_time: Instant,
) -> Result<ConversionSummary> {
    let output_path = config.resolve_output_path(input);

    let writer = OutputWriter::new(config.clone());
    let bytes_written = writer.write_to_path(&parsed.records, &output_path)?;

    Ok(ConversionSummary {
        input_path: input.to_path_buf(),
        output_path,
        parsed,
        bytes_written,
        processing_time_ms: start_time.elapsed().as_millis(),
    })
}
