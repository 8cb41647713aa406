//! Output writing for converted records.
//!
//! JSON output is the record collection rendered as a pretty-printed array.
//! CSV output goes through the tabular flattener so that every row has the
//! same width.

use crate::config::{ConverterConfig, OutputFormat};
use crate::error::Result;
use crate::models::Records;
use crate::tabular::flatten;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Renders record collections in the configured format
#[derive(Debug, Clone)]
pub struct OutputWriter {
    config: ConverterConfig,
}

impl OutputWriter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub fn format(&self) -> OutputFormat {
        self.config.format
    }

    /// Write records to any sink
    pub fn write<W: Write>(&self, records: &Records, mut sink: W) -> Result<()> {
        match self.config.format {
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut sink, records)?;
                sink.write_all(b"\n")?;
            }
            OutputFormat::Csv => {
                let table = flatten(records, &self.config);
                table.write_csv(&mut sink)?;
            }
        }
        sink.flush()?;
        Ok(())
    }

    /// Render records into an in-memory buffer
    pub fn render(&self, records: &Records) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write(records, &mut buffer)?;
        Ok(buffer)
    }

    /// Create (or overwrite) `path` and write records to it.
    ///
    /// Output is rendered in memory first so the file is only touched once
    /// rendering has succeeded. Returns the number of bytes written.
    pub fn write_to_path(&self, records: &Records, path: &Path) -> Result<u64> {
        let buffer = self.render(records)?;

        if path.exists() {
            warn!("Overwriting existing output file {}", path.display());
        }

        let mut file = BufWriter::new(File::create(path)?);
        file.write_all(&buffer)?;
        file.flush()?;

        debug!(
            "Wrote {} bytes of {:?} output to {}",
            buffer.len(),
            self.format(),
            path.display()
        );
        Ok(buffer.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::Measurement;
    use crate::models::{BodyCompositionRecord, Modality, TotalBodyRecord};
    use tempfile::TempDir;

    fn body_records() -> Records {
        Records::BodyComposition(vec![BodyCompositionRecord {
            id1: "Doe".to_string(),
            id2: "Jane".to_string(),
            id3: "42".to_string(),
            date: "2024-03-01".to_string(),
            mass: vec![Measurement::new(1.0, 2.0, 3.0, 4.0)],
            percent: Vec::new(),
        }])
    }

    #[test]
    fn test_json_output_is_pretty_array() {
        let writer = OutputWriter::new(ConverterConfig::default());
        let text = String::from_utf8(writer.render(&body_records()).unwrap()).unwrap();

        assert!(text.starts_with("[\n  {\n    \"id1\": \"Doe\""));
        assert!(text.ends_with("]\n"));
        assert!(!text.contains("\"percent\""));

        let parsed = Records::from_json(Modality::BodyComposition, &text).unwrap();
        assert_eq!(parsed, body_records());
    }

    #[test]
    fn test_empty_collection_renders_empty_array() {
        let writer = OutputWriter::new(ConverterConfig::default());
        let output = writer.render(&Records::TotalBody(Vec::new())).unwrap();
        assert_eq!(output, b"[]\n");
    }

    #[test]
    fn test_csv_output() {
        let writer = OutputWriter::new(ConverterConfig::default().with_format(OutputFormat::Csv));
        let records = Records::TotalBody(vec![TotalBodyRecord {
            id1: "Doe".to_string(),
            id2: "Jane".to_string(),
            id3: "42".to_string(),
            date: "2024-03-01".to_string(),
            values: vec![1.234],
        }]);
        let text = String::from_utf8(writer.render(&records).unwrap()).unwrap();

        assert_eq!(
            text,
            "Last_Name,First_Name,Patient_ID,Measure_Date,Head_BMD\n\
             Doe,Jane,42,2024-03-01,1.234000\n"
        );
    }

    #[test]
    fn test_write_to_path_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.json");
        std::fs::write(&path, "stale").unwrap();

        let writer = OutputWriter::new(ConverterConfig::default());
        let written = writer.write_to_path(&body_records(), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, contents.len() as u64);
        assert!(contents.starts_with('['));
    }
}
