use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use csv::StringRecord;
use log::info;

use crate::config::settings::LoaderSettings;
use crate::domain::{RankingRow, RankingTable};
use crate::errors::RankingError;

/// Only the first four sheet columns carry data; people use the rest of
/// the spreadsheet as scratch space, so anything beyond is ignored.
const DISPLAY_COLUMNS: usize = 4;

/// Column indexes resolved from the header row.
struct ColumnMap {
    name: usize,
    average: usize,
    match_count: usize,
    extra: Option<usize>,
}

/// Load the ranking sheet from a CSV export.
///
/// The sheet is trusted to be pre-sorted best first; no sorting happens
/// here. Any malformed row is a fatal load error, never skipped.
pub fn load_table(path: &Path, settings: &LoaderSettings) -> Result<RankingTable> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open ranking sheet: {}", path.display()))?;
    // Flexible so a short record surfaces as MalformedRow with its row
    // number instead of a csv length error.
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let headers = reader
        .headers()
        .context("Failed to read sheet header row")?
        .clone();
    let columns = resolve_columns(&headers, settings)?;

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        // 1-based sheet row number, accounting for the header row.
        let row_number = i + 2;
        let record = record
            .with_context(|| format!("Failed to read sheet row {row_number}"))?;
        rows.push(parse_row(&record, row_number, &columns)?);
    }

    info!("Loaded {} ranking rows from {}", rows.len(), path.display());
    Ok(RankingTable::new(rows))
}

/// Header lookup is case-insensitive and whitespace-trimmed, and only
/// considers the first four columns.
fn resolve_columns(headers: &StringRecord, settings: &LoaderSettings) -> Result<ColumnMap> {
    let normalized: Vec<String> = headers
        .iter()
        .take(DISPLAY_COLUMNS)
        .map(|h| h.trim().to_lowercase())
        .collect();

    let find = |wanted: &str| -> Result<usize, RankingError> {
        let target = wanted.to_lowercase();
        normalized
            .iter()
            .position(|h| *h == target)
            .ok_or_else(|| RankingError::MissingColumn {
                name: wanted.to_string(),
            })
    };

    let name = find(settings.name_column)?;
    let average = find(settings.average_column)?;
    let match_count = find(settings.match_count_column)?;
    // Whatever fourth column remains rides along untyped.
    let extra = (0..normalized.len()).find(|i| ![name, average, match_count].contains(i));

    Ok(ColumnMap {
        name,
        average,
        match_count,
        extra,
    })
}

fn parse_row(
    record: &StringRecord,
    row_number: usize,
    columns: &ColumnMap,
) -> Result<RankingRow, RankingError> {
    let malformed = |reason: String| RankingError::MalformedRow {
        row: row_number,
        reason,
    };

    let cell = |idx: usize| -> Result<&str, RankingError> {
        record
            .get(idx)
            .map(str::trim)
            .ok_or_else(|| malformed(format!("record has no column {}", idx + 1)))
    };

    let name = cell(columns.name)?;
    if name.is_empty() {
        return Err(malformed("empty player name".to_string()));
    }

    let average_cell = cell(columns.average)?;
    let average: f64 = average_cell
        .parse()
        .map_err(|_| malformed(format!("non-numeric average '{average_cell}'")))?;

    let count_cell = cell(columns.match_count)?;
    let match_count: i64 = count_cell
        .parse()
        .map_err(|_| malformed(format!("non-numeric match count '{count_cell}'")))?;

    let extra = columns
        .extra
        .and_then(|idx| record.get(idx))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    Ok(RankingRow {
        name: name.to_string(),
        average,
        match_count,
        extra,
    })
}
