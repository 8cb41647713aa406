//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Encode text as UTF-16LE with a byte order mark, as the scanner writes it
pub fn utf16le(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xFE];
    bytes.extend(text.encode_utf16().flat_map(u16::to_le_bytes));
    bytes
}

/// Write an export made of `lines` joined with CRLF
pub fn write_export(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, utf16le(&lines.join("\r\n"))).unwrap();
    path
}

pub const BODY_COMPOSITION_HEADER: &str = "Last Name\tFirst Name\tPatient ID\tMeasure Date\t\
     Arms Bone Mass (g)\tArms Fat Mass (g)\tArms Region %Fat";

pub const TOTAL_BODY_HEADER: &str =
    "Last Name\tFirst Name\tPatient ID\tMeasure Date\tHead BMD (g/cm2)\tArms BMD (g/cm2)";

pub const CORE_SCAN_HEADER: &str =
    "Last Name\tFirst Name\tPatient ID\tMeasure Date\tVAT Mass (lbs)\tVAT Volume (in3)";
