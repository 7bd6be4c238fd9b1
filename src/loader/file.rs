use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;

use super::{LoadError, LoadResult, RawTaskRow};
use crate::schema::{ColumnIndices, ColumnMap};

/// Read the schedule CSV at `path` into raw rows, in source order.
///
/// The header row is matched against `columns` to find the mapped fields;
/// extra columns are ignored. Cell values come back verbatim so the caller
/// decides what counts as a date. A file with a header and no data rows
/// yields an empty vec, which downstream treats as an empty (not broken)
/// schedule.
pub fn load_raw_rows<P: AsRef<Path>>(path: P, columns: &ColumnMap) -> LoadResult<Vec<RawTaskRow>> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);

    let headers = reader.headers()?.clone();
    let header_cells: Vec<&str> = headers.iter().collect();
    let indices = columns
        .resolve(&header_cells)
        .map_err(LoadError::MissingColumn)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(row_from_record(&record, &indices));
    }
    Ok(rows)
}

fn row_from_record(record: &csv::StringRecord, indices: &ColumnIndices) -> RawTaskRow {
    let cell = |idx: usize| record.get(idx).unwrap_or("").trim().to_string();
    RawTaskRow {
        description: cell(indices.description),
        planned_start: cell(indices.planned_start),
        planned_end: cell(indices.planned_end),
        actual_start: cell(indices.actual_start),
        actual_end: cell(indices.actual_end),
    }
}
