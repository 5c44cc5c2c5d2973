use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::error::SourceError;
use super::model::{
    AMOUNT_COLUMN, CellValue, NormalizedRecord, NormalizedTable, RawRecord, YEAR_COLUMN,
};

/// Options controlling how the raw file is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Non-blank records to skip before the header row.
    /// World Bank downloads start with a two-record preamble.
    pub skip_records: usize,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load and reshape a wide indicator file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` / `.txt` – comma-separated, header row with one column per year
pub fn load_file(path: &Path, options: &LoadOptions) -> Result<NormalizedTable, SourceError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" | "txt" => {
            let file = File::open(path).map_err(csv::Error::from)?;
            load_reader(file, options)
        }
        other => Err(SourceError::UnsupportedFormat(other.to_string())),
    }
}

/// Read a wide CSV from any reader, melt it and drop all-empty columns.
pub fn load_reader<R: Read>(
    reader: R,
    options: &LoadOptions,
) -> Result<NormalizedTable, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = reader.records();

    for _ in 0..options.skip_records {
        match records.next() {
            Some(rec) => {
                rec?;
            }
            None => break,
        }
    }

    let header = match records.next() {
        Some(rec) => rec?,
        None => return Err(SourceError::malformed("source has no header row")),
    };
    let layout = HeaderLayout::classify(&header)?;

    let mut raw = Vec::new();
    for (row_no, result) in records.enumerate() {
        let record = result?;
        if record.len() > layout.width {
            return Err(SourceError::malformed(format!(
                "row {}: {} fields but the header has {}",
                row_no + 1,
                record.len(),
                layout.width
            )));
        }
        raw.push(layout.raw_record(&record));
    }

    let years: Vec<i32> = layout.years.iter().map(|(_, y)| *y).collect();
    let descriptive: Vec<String> = layout.descriptive.into_iter().map(|(_, n)| n).collect();
    let n_raw = raw.len();

    let table = reshape(descriptive, &years, &raw).drop_empty_columns();
    log::info!(
        "Reshaped {n_raw} rows x {} year columns into {} records ({} descriptive columns kept)",
        years.len(),
        table.len(),
        table.descriptive_columns().len()
    );
    Ok(table)
}

/// Melt wide rows into one record per (row, year column).
///
/// Output is year-major: every raw row for the first year, then every raw row
/// for the second year, and so on.
pub fn reshape(
    descriptive_columns: Vec<String>,
    years: &[i32],
    raw: &[RawRecord],
) -> NormalizedTable {
    let mut records = Vec::with_capacity(raw.len() * years.len());
    for (y, &year) in years.iter().enumerate() {
        for row in raw {
            records.push(NormalizedRecord {
                fields: row.descriptive.clone(),
                year,
                amount: row.years.get(y).cloned().unwrap_or(CellValue::Empty),
            });
        }
    }
    NormalizedTable::new(descriptive_columns, records)
}

// ---------------------------------------------------------------------------
// Header classification
// ---------------------------------------------------------------------------

/// A header name is a year when it is made only of ASCII digits and fits an `i32`.
pub fn parse_year_label(name: &str) -> Option<i32> {
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    name.parse().ok()
}

/// Column positions of the header, split into descriptive and year columns.
#[derive(Debug)]
struct HeaderLayout {
    width: usize,
    descriptive: Vec<(usize, String)>,
    years: Vec<(usize, i32)>,
}

impl HeaderLayout {
    fn classify(header: &csv::StringRecord) -> Result<Self, SourceError> {
        let mut descriptive = Vec::new();
        let mut years = Vec::new();
        let mut seen_years = HashSet::new();

        for (idx, name) in header.iter().enumerate() {
            let name = if idx == 0 {
                name.trim_start_matches('\u{feff}')
            } else {
                name
            };
            match parse_year_label(name) {
                Some(year) => {
                    if !seen_years.insert(year) {
                        return Err(SourceError::malformed(format!(
                            "year {year} appears in more than one column"
                        )));
                    }
                    years.push((idx, year));
                }
                None => {
                    if name == YEAR_COLUMN || name == AMOUNT_COLUMN {
                        return Err(SourceError::malformed(format!(
                            "descriptive column '{name}' clashes with a reshaped column"
                        )));
                    }
                    descriptive.push((idx, name.to_string()));
                }
            }
        }

        if years.is_empty() {
            return Err(SourceError::malformed("header has no year columns"));
        }
        if descriptive.is_empty() {
            return Err(SourceError::malformed("header has no descriptive columns"));
        }

        Ok(HeaderLayout {
            width: header.len(),
            descriptive,
            years,
        })
    }

    /// Short rows read as if padded with empty cells.
    fn raw_record(&self, record: &csv::StringRecord) -> RawRecord {
        RawRecord {
            descriptive: self
                .descriptive
                .iter()
                .map(|(idx, _)| CellValue::text(record.get(*idx).unwrap_or("")))
                .collect(),
            years: self
                .years
                .iter()
                .map(|(idx, _)| CellValue::amount(record.get(*idx).unwrap_or("")))
                .collect(),
        }
    }
}
