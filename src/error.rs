//! Error handling for DXA file conversion.
//!
//! Every fatal condition aborts the whole conversion: decoding failures,
//! files with no content, headers that match no known scan layout, and
//! rows that break the arity rules of their modality. Rows that are merely
//! skipped never surface here.

use crate::models::Modality;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DxaError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input file not found: {path}")]
    InputNotFound { path: PathBuf },

    #[error("Decode error: {reason}")]
    Decode { reason: String },

    #[error("empty file")]
    EmptyFile,

    #[error("unrecognized file type: header matched no known scan layout ({header})")]
    UnknownModality { header: String },

    #[error("line {line}: {source}")]
    Row {
        line: usize,
        #[source]
        source: RowError,
    },

    #[error("record shape {found:?} does not match {expected:?} collection")]
    RecordShapeMismatch { expected: Modality, found: Modality },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Row-level failures that are fatal to the conversion.
///
/// The driver attaches the 1-based line number when wrapping these into
/// [`DxaError::Row`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    #[error("corescan row missing numeric fields (found {found}, need 2)")]
    MissingCoreScanValues { found: usize },

    #[error("cannot parse rows for an unknown modality")]
    UnknownModality,
}

impl DxaError {
    pub fn decode(reason: impl Into<String>) -> Self {
        Self::Decode {
            reason: reason.into(),
        }
    }

    /// True for failures caused by the input content rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Decode { .. } | Self::EmptyFile | Self::UnknownModality { .. } | Self::Row { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DxaError>;
