use std::fmt;

use polars::prelude::PolarsError;

use crate::config::PipelineConfig;
use crate::loader::{self, LoadError};
use crate::reconcile::{self, ReconcileError};
use crate::schedule::Schedule;

#[derive(Debug)]
pub enum PipelineError {
    Load(LoadError),
    Reconcile(ReconcileError),
    DataFrame(PolarsError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Load(err) => write!(f, "failed to load schedule: {err}"),
            PipelineError::Reconcile(err) => write!(f, "malformed schedule: {err}"),
            PipelineError::DataFrame(err) => write!(f, "dataframe conversion error: {err}"),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<LoadError> for PipelineError {
    fn from(value: LoadError) -> Self {
        Self::Load(value)
    }
}

impl From<ReconcileError> for PipelineError {
    fn from(value: ReconcileError) -> Self {
        Self::Reconcile(value)
    }
}

impl From<PolarsError> for PipelineError {
    fn from(value: PolarsError) -> Self {
        Self::DataFrame(value)
    }
}

/// Run one load-and-reconcile pass over the configured source file.
///
/// This is a synchronous batch transform: the whole file is read, every row
/// is reconciled, and only then is the table produced. Any malformed planned
/// date aborts the run with no output, so a chart never silently drops rows.
pub fn run(config: &PipelineConfig) -> Result<Schedule, PipelineError> {
    let rows = loader::load_raw_rows(&config.source_path, &config.columns)?;
    let records = reconcile::reconcile(&rows)?;
    if records.is_empty() {
        return Ok(Schedule::new());
    }
    Ok(Schedule::from_tasks(&records)?)
}
