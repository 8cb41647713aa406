//! Application constants for the DXA processor
//!
//! Header signatures used for modality detection and the column vocabulary
//! used when flattening records into CSV.

// =============================================================================
// Modality Detection
// =============================================================================

/// Lower-cased header substring identifying body composition exports
pub const BODY_COMPOSITION_SIGNATURE: &str = "arms fat mass";

/// Lower-cased header substring identifying total body BMD exports
pub const TOTAL_BODY_SIGNATURE: &str = "head bmd";

/// Lower-cased header substring identifying core scan (VAT) exports
pub const CORE_SCAN_SIGNATURE: &str = "vat mass";

// =============================================================================
// Row Layout
// =============================================================================

/// Field separator inside a decoded line
pub const FIELD_DELIMITER: char = '\t';

/// Leading identifier/date fields shared by every modality
pub const IDENTIFIER_FIELD_COUNT: usize = 4;

/// Minimum numeric values on a core scan row (mass, volume)
pub const CORE_SCAN_MIN_VALUES: usize = 2;

// =============================================================================
// CSV Column Labels
// =============================================================================

/// Identifier columns, in row order
pub const IDENTIFIER_COLUMNS: [&str; IDENTIFIER_FIELD_COUNT] =
    ["Last_Name", "First_Name", "Patient_ID", "Measure_Date"];

/// Column suffixes for the four fields of a measurement block
pub const BLOCK_SUFFIXES: [&str; 4] = ["Total", "Left", "Right", "Delta"];

/// Core scan value columns
pub const CORE_SCAN_COLUMNS: [&str; 2] = ["VAT_Mass_lbs", "VAT_Volume_in3"];

/// Regions reported by body composition exports
pub const BODY_REGIONS: &[&str] = &[
    "Arms", "Legs", "Trunk", "Android", "Gynoid", "Total", "TBLH",
];

/// Mass kinds; each kind covers every region before moving on
pub const MASS_KINDS: &[&str] = &["Bone", "Fat", "Lean", "Tissue", "Fat_Free", "Total"];

/// Percent-fat kinds; each kind covers every region before moving on
pub const PERCENT_FAT_KINDS: &[&str] = &["Region", "Tissue"];

/// Measurement sites reported by total body exports
pub const TOTAL_BODY_SITES: &[&str] = &[
    "Head",
    "Arms",
    "Legs",
    "Trunk",
    "Ribs",
    "Pelvis",
    "Spine",
    "Arm_Left",
    "Leg_Left",
    "Arm_Right",
    "Leg_Right",
    "Total",
    "TBLH",
    "Trunk_Left",
    "Total_Left",
    "Trunk_Right",
    "Total_Right",
];

/// Total body quantities; each quantity covers every site before moving on
pub const TOTAL_BODY_QUANTITIES: &[&str] = &[
    "BMD",
    "BMC",
    "Area",
    "T_Score",
    "Z_Score",
    "Average_Height",
    "Average_Width",
];

/// Fallback prefixes once the label tables run out
pub const GENERIC_MASS_PREFIX: &str = "Mass";
pub const GENERIC_PERCENT_PREFIX: &str = "Percent";
pub const GENERIC_VALUE_PREFIX: &str = "Value";

// =============================================================================
// Output Defaults
// =============================================================================

/// Decimal places for CSV numbers, matching C-style `%f`
pub const DEFAULT_DECIMAL_PLACES: u8 = 6;

/// Most decimal places a CSV number may carry; enough to round-trip any f64
pub const MAX_DECIMAL_PLACES: u8 = 17;

/// Longest header excerpt quoted in error messages
pub const HEADER_EXCERPT_CHARS: usize = 80;
