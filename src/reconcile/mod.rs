use std::fmt;

use chrono::NaiveDate;

use crate::loader::RawTaskRow;
use crate::task::TaskRecord;

/// Date formats accepted in the source sheet, tried in order. The site
/// exports use ISO dates or Brazilian day-first dates.
pub const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    /// A planned date is missing or does not parse. The chart needs one
    /// fully defined interval per task, so this aborts the whole batch:
    /// no partially reconciled schedule is ever handed to the renderer.
    MalformedDate {
        row: usize,
        column: &'static str,
        value: String,
    },
}

impl fmt::Display for ReconcileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReconcileError::MalformedDate { row, column, value } => {
                if value.is_empty() {
                    write!(f, "data row {}: {column} is empty", row + 1)
                } else {
                    write!(f, "data row {}: {column} '{value}' is not a date", row + 1)
                }
            }
        }
    }
}

impl std::error::Error for ReconcileError {}

/// The date used for display and duration: actual when known, else planned.
/// Called once per pair so a task can mix an actual start with a planned end.
pub fn final_date(actual: Option<NaiveDate>, planned: NaiveDate) -> NaiveDate {
    actual.unwrap_or(planned)
}

/// Calendar-day span of [start, end). Negative when the data has the end
/// before the start; that inconsistency is reported as-is, never clamped.
pub fn duration_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Reconcile the raw rows into render-ready records, preserving row order.
///
/// Planned dates must parse; the first failure aborts the batch. Actual
/// dates are best-effort: an empty or unparseable cell simply means the
/// milestone has not been recorded and the planned date stands in. An empty
/// input produces an empty output.
pub fn reconcile(rows: &[RawTaskRow]) -> Result<Vec<TaskRecord>, ReconcileError> {
    rows.iter()
        .enumerate()
        .map(|(row_idx, row)| reconcile_row(row_idx, row))
        .collect()
}

fn reconcile_row(row_idx: usize, row: &RawTaskRow) -> Result<TaskRecord, ReconcileError> {
    let planned_start = parse_required(row_idx, "planned_start", &row.planned_start)?;
    let planned_end = parse_required(row_idx, "planned_end", &row.planned_end)?;
    let actual_start = parse_lenient(&row.actual_start);
    let actual_end = parse_lenient(&row.actual_end);

    let final_start = final_date(actual_start, planned_start);
    let final_end = final_date(actual_end, planned_end);

    Ok(TaskRecord {
        description: row.description.clone(),
        planned_start,
        planned_end,
        actual_start,
        actual_end,
        final_start,
        final_end,
        duration_days: duration_days(final_start, final_end),
    })
}

fn parse_required(
    row: usize,
    column: &'static str,
    value: &str,
) -> Result<NaiveDate, ReconcileError> {
    parse_date(value).ok_or_else(|| ReconcileError::MalformedDate {
        row,
        column,
        value: value.to_string(),
    })
}

fn parse_lenient(value: &str) -> Option<NaiveDate> {
    parse_date(value)
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}
