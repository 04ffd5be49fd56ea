//! File readers and writers for the annotation formats.
//!
//! Whole files are decoded before anything is written, so a malformed row
//! aborts the run without leaving a partially converted output behind.

use diaops_format::{Dialect, Record, csv as csv_format, rttm};
use csv::{ReaderBuilder, WriterBuilder};
use eyre::{Context, Result};
use std::path::Path;

/// Read and decode a whole CSV annotation file.
pub fn read_csv(path: &Path, dialect: Dialect) -> Result<Vec<Record>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .wrap_err_with(|| format!("failed to open csv: {:?}", path.display()))?;

    let mut records = Vec::new();

    for (i, row) in reader.records().enumerate() {
        let row = row.wrap_err_with(|| format!("failed to read row {}", i + 1))?;
        let fields: Vec<&str> = row.iter().collect();

        let record = csv_format::decode_row(&fields, dialect)
            .wrap_err_with(|| format!("malformed row {} in {:?}", i + 1, path.display()))?;

        records.push(record);
    }

    Ok(records)
}

/// Encode records and write them as a CSV annotation file.
pub fn write_csv(path: &Path, records: &[Record]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .wrap_err_with(|| format!("failed to create csv: {:?}", path.display()))?;

    for record in records {
        writer
            .write_record(csv_format::encode_row(record))
            .wrap_err("failed to write csv row")?;
    }

    writer
        .flush()
        .wrap_err_with(|| format!("failed to write csv: {:?}", path.display()))
}

/// Read and decode a whole RTTM file, skipping blank lines.
pub fn read_rttm(path: &Path, dialect: Dialect) -> Result<Vec<Record>> {
    let content = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to open rttm: {:?}", path.display()))?;

    let mut records = Vec::new();

    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let record = rttm::decode_line(line, dialect)
            .wrap_err_with(|| format!("malformed line {} in {:?}", i + 1, path.display()))?;

        records.push(record);
    }

    Ok(records)
}

/// Encode records and write them as an RTTM file.
pub fn write_rttm(path: &Path, records: &[Record], recording_id: &str) -> Result<()> {
    let mut content = String::new();

    for record in records {
        content.push_str(&rttm::encode_line(record, recording_id));
        content.push('\n');
    }

    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write rttm: {:?}", path.display()))
}
