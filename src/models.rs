//! Core data structures for DXA conversion.
//!
//! Defines the scan modality tag, the three record shapes a scanner export
//! can carry, the homogeneous record collection produced for one file, and
//! the parse statistics reported alongside it.

use crate::error::{DxaError, Result};
use crate::measurement::Measurement;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scan layouts recognised from the header row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    Unknown,
    BodyComposition,
    TotalBody,
    CoreScan,
}

impl Modality {
    /// Short human-readable name used in logs and summaries
    pub fn label(&self) -> &'static str {
        match self {
            Modality::Unknown => "unknown",
            Modality::BodyComposition => "body composition",
            Modality::TotalBody => "total body",
            Modality::CoreScan => "core scan (VAT)",
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Modality::Unknown)
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fat mass and fat percentage by body region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyCompositionRecord {
    pub id1: String,
    pub id2: String,
    pub id3: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mass: Vec<Measurement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub percent: Vec<Measurement>,
}

/// Bone density values; positional meaning follows the export's column order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalBodyRecord {
    pub id1: String,
    pub id2: String,
    pub id3: String,
    pub date: String,
    pub values: Vec<f64>,
}

/// Visceral adipose tissue scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreScanRecord {
    pub id1: String,
    pub id2: String,
    pub id3: String,
    pub date: String,
    /// VAT mass in pounds
    #[serde(rename = "vat_mass_lbs")]
    pub vat_mass: f64,
    /// VAT volume in cubic inches
    #[serde(rename = "vat_volume_in3")]
    pub vat_volume: f64,
}

/// One parsed data row
#[derive(Debug, Clone, PartialEq)]
pub enum Record {
    BodyComposition(BodyCompositionRecord),
    TotalBody(TotalBodyRecord),
    CoreScan(CoreScanRecord),
}

impl Record {
    pub fn modality(&self) -> Modality {
        match self {
            Record::BodyComposition(_) => Modality::BodyComposition,
            Record::TotalBody(_) => Modality::TotalBody,
            Record::CoreScan(_) => Modality::CoreScan,
        }
    }
}

/// Homogeneous record collection for a single file.
///
/// Serializes as a bare JSON array of objects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Records {
    BodyComposition(Vec<BodyCompositionRecord>),
    TotalBody(Vec<TotalBodyRecord>),
    CoreScan(Vec<CoreScanRecord>),
}

impl Records {
    /// Empty collection for a modality; `None` for [`Modality::Unknown`]
    pub fn for_modality(modality: Modality) -> Option<Self> {
        match modality {
            Modality::Unknown => None,
            Modality::BodyComposition => Some(Records::BodyComposition(Vec::new())),
            Modality::TotalBody => Some(Records::TotalBody(Vec::new())),
            Modality::CoreScan => Some(Records::CoreScan(Vec::new())),
        }
    }

    pub fn modality(&self) -> Modality {
        match self {
            Records::BodyComposition(_) => Modality::BodyComposition,
            Records::TotalBody(_) => Modality::TotalBody,
            Records::CoreScan(_) => Modality::CoreScan,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Records::BodyComposition(rows) => rows.len(),
            Records::TotalBody(rows) => rows.len(),
            Records::CoreScan(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a record, rejecting shapes that belong to another modality
    pub fn push(&mut self, record: Record) -> Result<()> {
        match (self, record) {
            (Records::BodyComposition(rows), Record::BodyComposition(r)) => rows.push(r),
            (Records::TotalBody(rows), Record::TotalBody(r)) => rows.push(r),
            (Records::CoreScan(rows), Record::CoreScan(r)) => rows.push(r),
            (records, record) => {
                return Err(DxaError::RecordShapeMismatch {
                    expected: records.modality(),
                    found: record.modality(),
                });
            }
        }
        Ok(())
    }

    /// Parse a JSON array previously written for `modality`
    pub fn from_json(modality: Modality, json: &str) -> Result<Self> {
        let records = match modality {
            Modality::BodyComposition => Records::BodyComposition(serde_json::from_str(json)?),
            Modality::TotalBody => Records::TotalBody(serde_json::from_str(json)?),
            Modality::CoreScan => Records::CoreScan(serde_json::from_str(json)?),
            Modality::Unknown => {
                return Err(DxaError::UnknownModality {
                    header: "<json input>".to_string(),
                });
            }
        };
        Ok(records)
    }
}

/// Per-file parse statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Lines seen, header and blank lines included
    pub lines_read: usize,
    pub blank_lines: usize,
    pub rows_accepted: usize,
    /// Rows with fewer than four tab-separated fields
    pub rows_skipped_short: usize,
    /// Body composition rows carrying no numeric values
    pub rows_skipped_no_values: usize,
}

impl ParseStats {
    pub fn rows_skipped(&self) -> usize {
        self.rows_skipped_short + self.rows_skipped_no_values
    }
}

/// Result of parsing one scanner export
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFile {
    pub modality: Modality,
    pub records: Records,
    pub stats: ParseStats,
}
