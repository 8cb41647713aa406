//! Numeric token extraction from free-text fields.
//!
//! Scanner cells mix numbers with units, thousands separators and signs
//! (`"1,234.56 kg"`, `"-3 +4"`). Tokens are pulled out field by field so
//! the output keeps the column order of the row.

use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// Optional sign, a digit, digits or commas, optional decimal part
static NUMERIC_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[-+]?[0-9][0-9,]*\.?[0-9]*").expect("numeric token pattern is valid")
});

/// Extract every numeric token of a single field
pub fn extract_field(field: &str) -> Vec<f64> {
    NUMERIC_TOKEN
        .find_iter(field)
        .filter_map(|m| parse_token(m.as_str()))
        .collect()
}

/// Extract numeric tokens from each field in turn and concatenate them
pub fn extract_numbers<S: AsRef<str>>(fields: &[S]) -> Vec<f64> {
    fields
        .iter()
        .flat_map(|field| extract_field(field.as_ref()))
        .collect()
}

fn parse_token(token: &str) -> Option<f64> {
    let cleaned = token.replace(',', "");
    if cleaned.is_empty() {
        return None;
    }

    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        Ok(value) => {
            trace!("Dropping numeric token '{}': out of range ({})", token, value);
            None
        }
        Err(e) => {
            trace!("Dropping numeric token '{}': {}", token, e);
            None
        }
    }
}
