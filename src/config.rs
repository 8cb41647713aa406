//! Conversion configuration.
//!
//! Holds the choices that shape the output of a conversion: the output
//! format, where the output goes, how CSV columns are named and how many
//! decimals CSV numbers carry.

use crate::constants::{DEFAULT_DECIMAL_PLACES, MAX_DECIMAL_PLACES};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Output formats supported by the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON array of records
    #[default]
    Json,
    /// Rectangular CSV table with one row per record
    Csv,
}

impl OutputFormat {
    /// File extension appended to the input path for default output naming
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

/// CSV column naming style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HeaderStyle {
    /// Region/quantity labels such as `Arms_Fat_Mass_Total` or `Head_BMD`
    #[default]
    Friendly,
    /// Positional labels such as `Mass_0_Total` or `Value_0`
    Generic,
}

/// Options for converting a single scanner export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Output format
    pub format: OutputFormat,

    /// Explicit output path; defaults to `<input>.<format>`
    pub output_path: Option<PathBuf>,

    /// CSV column naming style
    pub header_style: HeaderStyle,

    /// Decimal places for numbers in CSV cells, at most `MAX_DECIMAL_PLACES`
    pub decimal_places: u8,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Json,
            output_path: None,
            header_style: HeaderStyle::Friendly,
            decimal_places: DEFAULT_DECIMAL_PLACES,
        }
    }
}

impl ConverterConfig {
    /// Set the output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Write to an explicit output path
    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }

    /// Set the CSV column naming style
    pub fn with_header_style(mut self, header_style: HeaderStyle) -> Self {
        self.header_style = header_style;
        self
    }

    /// Set the decimal places used for CSV numbers, capped at `MAX_DECIMAL_PLACES`
    pub fn with_decimal_places(mut self, decimal_places: u8) -> Self {
        self.decimal_places = decimal_places.min(MAX_DECIMAL_PLACES);
        self
    }

    /// Decimal places actually used when rendering, whatever was stored
    pub fn effective_decimal_places(&self) -> usize {
        usize::from(self.decimal_places.min(MAX_DECIMAL_PLACES))
    }

    /// Resolve where output for `input` should be written.
    ///
    /// Without an explicit path the format extension is appended to the
    /// full input file name, so `scan.txt` becomes `scan.txt.json`.
    pub fn resolve_output_path(&self, input: &Path) -> PathBuf {
        match &self.output_path {
            Some(path) => path.clone(),
            None => {
                let mut name = OsString::from(input.as_os_str());
                name.push(".");
                name.push(self.format.extension());
                PathBuf::from(name)
            }
        }
    }
}
