//! Delimited three-column ingestion
//!
//! One row per sample, one column per axis (x, y, z), no header row.
//! Lines starting with `#` are comments.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};

use super::axis::AxisSeries;
use crate::error::{Result, SpectralError};
use crate::spectrum::remove_dc_offset;

const NUM_COLUMNS: usize = 3;

/// Options for reading a three-axis file
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Column delimiter byte
    pub delimiter: u8,

    /// Subtract each column's mean after parsing
    pub remove_dc: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            remove_dc: true,
        }
    }
}

/// Parse three numeric columns from any reader
///
/// Fails with `MalformedInput` on a row with a column count other than three,
/// on a non-numeric field, or when the source holds no data rows.
pub fn parse_three_axis<R: Read>(reader: R, options: &IngestOptions) -> Result<AxisSeries<Vec<f64>>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(options.delimiter)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut columns: AxisSeries<Vec<f64>> = AxisSeries::default();

    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(|e| match e.into_kind() {
            csv::ErrorKind::Io(io) => SpectralError::Io(io),
            kind => SpectralError::MalformedInput(format!("row {}: {:?}", idx + 1, kind)),
        })?;
        let line = record.position().map_or(idx as u64 + 1, |p| p.line());

        // Whitespace-only line, trimmed down to a single empty field
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }

        if record.len() != NUM_COLUMNS {
            return Err(SpectralError::MalformedInput(format!(
                "line {line}: expected {NUM_COLUMNS} columns, found {}",
                record.len()
            )));
        }

        let row = AxisSeries::new(&record[0], &record[1], &record[2]).try_map(|field| {
            field.parse::<f64>().map_err(|_| {
                SpectralError::MalformedInput(format!("line {line}: '{field}' is not a number"))
            })
        })?;

        columns.x.push(row.x);
        columns.y.push(row.y);
        columns.z.push(row.z);
    }

    if columns.x.is_empty() {
        return Err(SpectralError::MalformedInput("no numeric samples found".into()));
    }

    if options.remove_dc {
        columns = columns.try_map(|column| remove_dc_offset(&column))?;
    }

    Ok(columns)
}

/// Read three numeric columns from a delimited file
pub fn read_three_axis(path: &Path, options: &IngestOptions) -> Result<AxisSeries<Vec<f64>>> {
    let file = File::open(path)?;
    let columns = parse_three_axis(file, options).map_err(|e| match e {
        SpectralError::MalformedInput(msg) => {
            SpectralError::MalformedInput(format!("{}: {msg}", path.display()))
        }
        other => other,
    })?;

    log::debug!("read {} samples per axis from {}", columns.x.len(), path.display());

    Ok(columns)
}
