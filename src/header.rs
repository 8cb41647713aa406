//! Header row sniffing.
//!
//! The header row is never parsed into a schema; it only decides which of
//! the known scan layouts governs the rest of the file. Detection is a
//! case-insensitive substring test with a fixed precedence: body
//! composition, then total body, then core scan.

use crate::constants::{
    BODY_COMPOSITION_SIGNATURE, CORE_SCAN_SIGNATURE, HEADER_EXCERPT_CHARS, TOTAL_BODY_SIGNATURE,
};
use crate::error::{DxaError, Result};
use crate::models::Modality;
use tracing::debug;

/// Signatures in precedence order
const SIGNATURES: [(&str, Modality); 3] = [
    (BODY_COMPOSITION_SIGNATURE, Modality::BodyComposition),
    (TOTAL_BODY_SIGNATURE, Modality::TotalBody),
    (CORE_SCAN_SIGNATURE, Modality::CoreScan),
];

/// Classify a header line; [`Modality::Unknown`] when nothing matches
pub fn detect_modality(header: &str) -> Modality {
    let lowered = header.to_lowercase();

    SIGNATURES
        .iter()
        .find(|(signature, _)| lowered.contains(*signature))
        .map_or(Modality::Unknown, |&(_, modality)| modality)
}

/// Classify a header line, failing for headers that match no signature
pub fn require_modality(header: &str) -> Result<Modality> {
    let modality = detect_modality(header);
    if !modality.is_known() {
        return Err(DxaError::UnknownModality {
            header: excerpt(header),
        });
    }

    debug!("Detected {} export from header", modality);
    Ok(modality)
}

fn excerpt(header: &str) -> String {
    let mut chars = header.chars();
    let head: String = chars.by_ref().take(HEADER_EXCERPT_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", head)
    } else {
        head
    }
}
