//! Per-modality line parsing.
//!
//! Every data row starts with four identifier/date fields; whatever follows
//! is scanned for numeric tokens and shaped according to the file's
//! modality. A row either becomes a record, is skipped, or fails the file.

use crate::constants::{CORE_SCAN_MIN_VALUES, FIELD_DELIMITER, IDENTIFIER_FIELD_COUNT};
use crate::error::RowError;
use crate::measurement::group_measurements;
use crate::models::{BodyCompositionRecord, CoreScanRecord, Modality, Record, TotalBodyRecord};
use crate::numeric::extract_numbers;

/// Why a row was ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Fewer than four tab-separated fields
    TooFewFields,
    /// Body composition row with no numeric payload
    NoNumericValues,
}

/// Outcome of parsing one non-blank line
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Parsed(Record),
    Skipped(SkipReason),
}

/// Identifier and date columns shared by every record shape
#[derive(Debug, Clone, PartialEq, Eq)]
struct Identifiers {
    id1: String,
    id2: String,
    id3: String,
    date: String,
}

/// Parse a trimmed line under `modality`
pub fn parse_line(modality: Modality, line: &str) -> Result<LineOutcome, RowError> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() < IDENTIFIER_FIELD_COUNT {
        return Ok(LineOutcome::Skipped(SkipReason::TooFewFields));
    }

    let ids = Identifiers {
        id1: fields[0].trim().to_string(),
        id2: fields[1].trim().to_string(),
        id3: fields[2].trim().to_string(),
        date: fields[3].trim().to_string(),
    };
    let values = extract_numbers(&fields[IDENTIFIER_FIELD_COUNT..]);

    match modality {
        Modality::BodyComposition => Ok(body_composition(ids, &values)),
        Modality::TotalBody => Ok(total_body(ids, values)),
        Modality::CoreScan => core_scan(ids, &values),
        Modality::Unknown => Err(RowError::UnknownModality),
    }
}

/// First half of the values is mass, the rest is percent.
///
/// The split point is `n / 2`, so an odd count leaves the percent half one
/// value longer; leftovers past a multiple of four are dropped by grouping.
fn body_composition(ids: Identifiers, values: &[f64]) -> LineOutcome {
    if values.is_empty() {
        return LineOutcome::Skipped(SkipReason::NoNumericValues);
    }

    let (mass, percent) = values.split_at(values.len() / 2);
    LineOutcome::Parsed(Record::BodyComposition(BodyCompositionRecord {
        id1: ids.id1,
        id2: ids.id2,
        id3: ids.id3,
        date: ids.date,
        mass: group_measurements(mass),
        percent: group_measurements(percent),
    }))
}

fn total_body(ids: Identifiers, values: Vec<f64>) -> LineOutcome {
    LineOutcome::Parsed(Record::TotalBody(TotalBodyRecord {
        id1: ids.id1,
        id2: ids.id2,
        id3: ids.id3,
        date: ids.date,
        values,
    }))
}

fn core_scan(ids: Identifiers, values: &[f64]) -> Result<LineOutcome, RowError> {
    if values.len() < CORE_SCAN_MIN_VALUES {
        return Err(RowError::MissingCoreScanValues {
            found: values.len(),
        });
    }

    Ok(LineOutcome::Parsed(Record::CoreScan(CoreScanRecord {
        id1: ids.id1,
        id2: ids.id2,
        id3: ids.id3,
        date: ids.date,
        vat_mass: values[0],
        vat_volume: values[1],
    })))
}
