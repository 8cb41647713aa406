//! Integration tests for the processor module
//!
//! Tests the complete decode → detect → parse → write pipeline using
//! synthetic UTF-16 scanner exports.

pub mod error_handling;

use crate::decoder::encode_utf16le;
use std::path::{Path, PathBuf};

pub const BODY_COMPOSITION_HEADER: &str =
    "Last Name\tFirst Name\tPatient ID\tMeasure Date\tArms Fat Mass (g)\tArms Region %Fat";
pub const TOTAL_BODY_HEADER: &str =
    "Last Name\tFirst Name\tPatient ID\tMeasure Date\tHead BMD\tArms BMD";
pub const CORE_SCAN_HEADER: &str =
    "Last Name\tFirst Name\tPatient ID\tMeasure Date\tVAT Mass (lbs)\tVAT Volume (in3)";

/// Helper to write a UTF-16LE export with BOM
pub fn write_export(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let text = lines.join("\r\n");
    std::fs::write(&path, encode_utf16le(&text)).unwrap();
    path
}
