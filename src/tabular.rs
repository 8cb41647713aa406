//! Rectangular CSV flattening.
//!
//! Body composition rows carry a varying number of measurement blocks, so
//! the table width is only known once every record has been seen. The
//! flattener makes one pass to find the widest mass and percent sections,
//! then a second pass that emits each row padded to that width.

use crate::config::{ConverterConfig, HeaderStyle};
use crate::constants::{
    BLOCK_SUFFIXES, BODY_REGIONS, CORE_SCAN_COLUMNS, GENERIC_MASS_PREFIX, GENERIC_PERCENT_PREFIX,
    GENERIC_VALUE_PREFIX, IDENTIFIER_COLUMNS, MASS_KINDS, PERCENT_FAT_KINDS,
    TOTAL_BODY_QUANTITIES, TOTAL_BODY_SITES,
};
use crate::error::Result;
use crate::measurement::{BLOCK_WIDTH, Measurement};
use crate::models::{BodyCompositionRecord, CoreScanRecord, Records, TotalBodyRecord};
use std::io::Write;
use tracing::debug;

/// A header row plus data rows, all of the same width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Write the table as CSV
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(&self.header)?;
        for row in &self.rows {
            csv_writer.write_record(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

/// Flatten a record collection into a rectangular table
pub fn flatten(records: &Records, config: &ConverterConfig) -> Table {
    let cells = CellFormatter {
        decimal_places: config.effective_decimal_places(),
    };
    let labels = ColumnLabels {
        style: config.header_style,
    };

    let table = match records {
        Records::BodyComposition(rows) => flatten_body_composition(rows, &labels, &cells),
        Records::TotalBody(rows) => flatten_total_body(rows, &labels, &cells),
        Records::CoreScan(rows) => flatten_core_scan(rows, &cells),
    };

    debug!(
        "Flattened {} records into {} columns",
        table.rows.len(),
        table.column_count()
    );
    table
}

fn identifier_header() -> Vec<String> {
    IDENTIFIER_COLUMNS.iter().map(|c| c.to_string()).collect()
}

fn identifier_cells(id1: &str, id2: &str, id3: &str, date: &str) -> Vec<String> {
    vec![
        id1.to_string(),
        id2.to_string(),
        id3.to_string(),
        date.to_string(),
    ]
}

fn flatten_body_composition(
    rows: &[BodyCompositionRecord],
    labels: &ColumnLabels,
    cells: &CellFormatter,
) -> Table {
    let max_mass = rows.iter().map(|r| r.mass.len()).max().unwrap_or(0);
    let max_percent = rows.iter().map(|r| r.percent.len()).max().unwrap_or(0);

    let mut header = identifier_header();
    for i in 0..max_mass {
        push_block_header(&mut header, &labels.mass(i));
    }
    for i in 0..max_percent {
        push_block_header(&mut header, &labels.percent(i));
    }

    let rows = rows
        .iter()
        .map(|r| {
            let mut line = identifier_cells(&r.id1, &r.id2, &r.id3, &r.date);
            cells.push_blocks(&mut line, &r.mass, max_mass);
            cells.push_blocks(&mut line, &r.percent, max_percent);
            line
        })
        .collect();

    Table { header, rows }
}

fn flatten_total_body(
    rows: &[TotalBodyRecord],
    labels: &ColumnLabels,
    cells: &CellFormatter,
) -> Table {
    let width = rows.iter().map(|r| r.values.len()).max().unwrap_or(0);

    let mut header = identifier_header();
    header.extend((0..width).map(|i| labels.value(i)));

    let rows = rows
        .iter()
        .map(|r| {
            let mut line = identifier_cells(&r.id1, &r.id2, &r.id3, &r.date);
            line.extend(r.values.iter().map(|&v| cells.number(v)));
            line.resize(IDENTIFIER_COLUMNS.len() + width, String::new());
            line
        })
        .collect();

    Table { header, rows }
}

fn flatten_core_scan(rows: &[CoreScanRecord], cells: &CellFormatter) -> Table {
    let mut header = identifier_header();
    header.extend(CORE_SCAN_COLUMNS.iter().map(|c| c.to_string()));

    let rows = rows
        .iter()
        .map(|r| {
            let mut line = identifier_cells(&r.id1, &r.id2, &r.id3, &r.date);
            line.push(cells.number(r.vat_mass));
            line.push(cells.number(r.vat_volume));
            line
        })
        .collect();

    Table { header, rows }
}

fn push_block_header(header: &mut Vec<String>, label: &str) {
    header.extend(
        BLOCK_SUFFIXES
            .iter()
            .map(|suffix| format!("{}_{}", label, suffix)),
    );
}

struct CellFormatter {
    decimal_places: usize,
}

impl CellFormatter {
    fn number(&self, value: f64) -> String {
        format!("{:.*}", self.decimal_places, value)
    }

    /// Emit every block, then empty cells up to `max_blocks`
    fn push_blocks(&self, line: &mut Vec<String>, blocks: &[Measurement], max_blocks: usize) {
        for block in blocks {
            line.extend(block.values().iter().map(|&v| self.number(v)));
        }
        let padding = max_blocks.saturating_sub(blocks.len()) * BLOCK_WIDTH;
        line.extend(std::iter::repeat_n(String::new(), padding));
    }
}

/// Column label vocabulary
struct ColumnLabels {
    style: HeaderStyle,
}

impl ColumnLabels {
    fn mass(&self, index: usize) -> String {
        self.friendly(index, BODY_REGIONS, MASS_KINDS)
            .map(|label| format!("{}_Mass", label))
            .unwrap_or_else(|| format!("{}_{}", GENERIC_MASS_PREFIX, index))
    }

    fn percent(&self, index: usize) -> String {
        self.friendly(index, BODY_REGIONS, PERCENT_FAT_KINDS)
            .map(|label| format!("{}_Percent_Fat", label))
            .unwrap_or_else(|| format!("{}_{}", GENERIC_PERCENT_PREFIX, index))
    }

    fn value(&self, index: usize) -> String {
        self.friendly(index, TOTAL_BODY_SITES, TOTAL_BODY_QUANTITIES)
            .unwrap_or_else(|| format!("{}_{}", GENERIC_VALUE_PREFIX, index))
    }

    /// `<inner>_<outer>` where the inner table cycles fastest
    fn friendly(&self, index: usize, inner: &[&str], outer: &[&str]) -> Option<String> {
        if self.style == HeaderStyle::Generic || index >= inner.len() * outer.len() {
            return None;
        }
        Some(format!(
            "{}_{}",
            inner[index % inner.len()],
            outer[index / inner.len()]
        ))
    }
}
