//! Error handling integration tests

use super::{CORE_SCAN_HEADER, write_export};
use crate::config::{ConverterConfig, OutputFormat};
use crate::decoder::encode_utf16le;
use crate::error::{DxaError, RowError};
use crate::processor::{convert_file, parse_bytes, parse_file, parse_text};
use tempfile::TempDir;

#[test]
fn test_nonexistent_input_path() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.txt");

    match parse_file(&missing).unwrap_err() {
        DxaError::InputNotFound { path } => assert_eq!(path, missing),
        other => panic!("Expected InputNotFound error, got {:?}", other),
    }
}

#[test]
fn test_empty_inputs() {
    assert!(matches!(parse_bytes(&[]), Err(DxaError::EmptyFile)));
    assert!(matches!(
        parse_bytes(&encode_utf16le("")),
        Err(DxaError::EmptyFile)
    ));
    assert!(matches!(
        parse_text("\r\n  \r\n\t\r\n"),
        Err(DxaError::EmptyFile)
    ));
}

#[test]
fn test_missing_bom_is_decode_error() {
    let bytes: Vec<u8> = CORE_SCAN_HEADER
        .encode_utf16()
        .flat_map(u16::to_le_bytes)
        .collect();
    assert!(matches!(parse_bytes(&bytes), Err(DxaError::Decode { .. })));
}

#[test]
fn test_plain_utf8_input_is_rejected() {
    // UTF-8 text has no BOM and usually an odd length
    let result = parse_bytes(b"Last Name\tVAT Mass\n");
    assert!(matches!(result, Err(DxaError::Decode { .. })));
}

#[test]
fn test_unknown_modality_processes_no_rows() {
    let text = "Last Name\tFirst Name\tID\tDate\tSpine BMD\nDoe\tJane\t1\tdate\t1.0";
    match parse_text(text).unwrap_err() {
        DxaError::UnknownModality { header } => assert!(header.contains("Spine BMD")),
        other => panic!("Expected UnknownModality error, got {:?}", other),
    }
}

#[test]
fn test_core_scan_row_error_reports_line_number() {
    let text = [
        CORE_SCAN_HEADER,
        "",
        "Doe\tJane\t42\t2024-01-01\t1.5\t40",
        "Roe\tRichard\t43\t2024-01-02\t1.7",
        "Poe\tEdgar\t44\t2024-01-03\t1.1\t30",
    ]
    .join("\n");

    match parse_text(&text).unwrap_err() {
        DxaError::Row { line, source } => {
            assert_eq!(line, 4);
            assert_eq!(source, RowError::MissingCoreScanValues { found: 1 });
        }
        other => panic!("Expected Row error, got {:?}", other),
    }
}

#[test]
fn test_failed_conversion_creates_no_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_export(
        temp_dir.path(),
        "vat.txt",
        &[
            CORE_SCAN_HEADER,
            "Doe\tJane\t42\t2024-01-01\t1.5\t40",
            "Roe\tRichard\t43\t2024-01-02\tn/a",
        ],
    );
    let config = ConverterConfig::default().with_format(OutputFormat::Csv);

    let error = convert_file(&input, &config).unwrap_err();

    assert!(matches!(error, DxaError::Row { line: 3, .. }));
    assert!(!temp_dir.path().join("vat.txt.csv").exists());
}

#[test]
fn test_failed_conversion_keeps_existing_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_export(temp_dir.path(), "unknown.txt", &["Name\tDate\tWeight"]);
    let output = temp_dir.path().join("unknown.txt.json");
    std::fs::write(&output, "previous").unwrap();

    assert!(convert_file(&input, &ConverterConfig::default()).is_err());
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "previous");
}
