//! CSV import of sensor packages
//!
//! Rows are bound positionally later, so a blank cell inside a row is an
//! error rather than something to skip.

use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Result, TrainingError};
use crate::models::Package;

/// Read sensor packages from a headerless CSV file
///
/// Each row is `CODE,value,value,...`; rows may have different widths and
/// lines starting with `#` are skipped.
pub fn read_packages_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Package>> {
    let file = File::open(path.as_ref())?;
    let packages = read_packages(file)?;

    tracing::info!(
        path = %path.as_ref().display(),
        packages = packages.len(),
        "Imported sensor packages"
    );

    Ok(packages)
}

/// Read sensor packages from any CSV source
pub fn read_packages<R: Read>(reader: R) -> Result<Vec<Package>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut packages = Vec::new();
    for (index, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| TrainingError::Import(e.to_string()))?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 1);

        if record.iter().all(str::is_empty) {
            continue;
        }

        packages.push(parse_record(&record, line)?);
    }

    Ok(packages)
}

fn parse_record(record: &StringRecord, line: u64) -> Result<Package> {
    let mut fields = record.iter();
    let code = fields
        .next()
        .filter(|code| !code.is_empty())
        .ok_or_else(|| TrainingError::Import(format!("line {}: missing workout code", line)))?;

    let cells: Vec<&str> = fields.collect();
    let used = cells
        .iter()
        .rposition(|cell| !cell.is_empty())
        .map_or(0, |last| last + 1);

    // Column 1 holds the code, so values start at column 2
    let data = cells[..used]
        .iter()
        .enumerate()
        .map(|(offset, cell)| parse_value(cell, line, offset + 2))
        .collect::<Result<Vec<f64>>>()?;

    Ok(Package::new(code, data))
}

fn parse_value(cell: &str, line: u64, column: usize) -> Result<f64> {
    if cell.is_empty() {
        return Err(TrainingError::Import(format!(
            "line {}: empty value in column {}",
            line, column
        )));
    }

    cell.parse::<f64>()
        .map_err(|_| TrainingError::Import(format!("line {}: invalid number '{}'", line, cell)))
}
