use std::fmt;
use std::io;

#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Csv(csv::Error),
    /// The header row does not contain the label a mapped field points at.
    MissingColumn(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "io error: {err}"),
            LoadError::Csv(err) => write!(f, "csv error: {err}"),
            LoadError::MissingColumn(label) => {
                write!(f, "schedule is missing required column '{label}'")
            }
        }
    }
}

impl std::error::Error for LoadError {}

impl From<io::Error> for LoadError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<csv::Error> for LoadError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

pub type LoadResult<T> = Result<T, LoadError>;

/// One source row as it appears in the spreadsheet: raw text, no date
/// parsing. Order of rows is preserved end to end because it defines the
/// vertical order of the chart.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawTaskRow {
    pub description: String,
    pub planned_start: String,
    pub planned_end: String,
    pub actual_start: String,
    pub actual_end: String,
}

pub mod file;

pub use file::load_raw_rows;
