//! Symmetric measurement blocks.
//!
//! Body composition exports list each region as four consecutive numbers:
//! total, left, right and a left/right delta. This module folds flat
//! numeric runs into those blocks.

use serde::{Deserialize, Serialize};

/// Number of values making up one block
pub const BLOCK_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub total: f64,
    pub left: f64,
    pub right: f64,
    /// Asymmetry indicator as reported by the scanner
    pub delta: f64,
}

impl Measurement {
    pub fn new(total: f64, left: f64, right: f64, delta: f64) -> Self {
        Self {
            total,
            left,
            right,
            delta,
        }
    }

    /// Field values in column order
    pub fn values(&self) -> [f64; BLOCK_WIDTH] {
        [self.total, self.left, self.right, self.delta]
    }
}

/// Group values into blocks of four, dropping any trailing remainder
pub fn group_measurements(values: &[f64]) -> Vec<Measurement> {
    values
        .chunks_exact(BLOCK_WIDTH)
        .map(|block| Measurement::new(block[0], block[1], block[2], block[3]))
        .collect()
}
