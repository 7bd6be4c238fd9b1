use chrono::{Duration, NaiveDate};
use polars::prelude::PlSmallStr;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// One reconciled schedule row. Planned dates are always present; actual
/// dates appear once the milestone has happened on site. The final dates and
/// duration are derived, never entered by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub description: String,
    pub planned_start: NaiveDate,
    pub planned_end: NaiveDate,
    pub actual_start: Option<NaiveDate>,
    pub actual_end: Option<NaiveDate>,
    pub final_start: NaiveDate,
    pub final_end: NaiveDate,
    pub duration_days: i64,
}

impl TaskRecord {
    pub fn to_dataframe_row(&self) -> PolarsResult<DataFrame> {
        let mut columns: Vec<Column> = Vec::with_capacity(8);

        let description: [&str; 1] = [self.description.as_str()];
        columns.push(Series::new(PlSmallStr::from_static("description"), description).into_column());
        columns.push(Self::series_from_date("planned_start", Some(self.planned_start))?.into_column());
        columns.push(Self::series_from_date("planned_end", Some(self.planned_end))?.into_column());
        columns.push(Self::series_from_date("actual_start", self.actual_start)?.into_column());
        columns.push(Self::series_from_date("actual_end", self.actual_end)?.into_column());
        columns.push(Self::series_from_date("final_start", Some(self.final_start))?.into_column());
        columns.push(Self::series_from_date("final_end", Some(self.final_end))?.into_column());

        let duration: [i64; 1] = [self.duration_days];
        columns.push(Series::new(PlSmallStr::from_static("duration_days"), duration).into_column());

        DataFrame::new(columns)
    }

    pub fn from_dataframe_row(df: &DataFrame, row_idx: usize) -> PolarsResult<Self> {
        let description = df
            .column("description")?
            .str()?
            .get(row_idx)
            .unwrap_or("")
            .to_string();

        let planned_start = Self::required_date(df, "planned_start", row_idx)?;
        let planned_end = Self::required_date(df, "planned_end", row_idx)?;
        let final_start = Self::required_date(df, "final_start", row_idx)?;
        let final_end = Self::required_date(df, "final_end", row_idx)?;

        let duration_days = df
            .column("duration_days")?
            .i64()?
            .get(row_idx)
            .unwrap_or(0);

        Ok(Self {
            description,
            planned_start,
            planned_end,
            actual_start: Self::date_from_series(df.column("actual_start")?.date()?, row_idx),
            actual_end: Self::date_from_series(df.column("actual_end")?.date()?, row_idx),
            final_start,
            final_end,
            duration_days,
        })
    }

    fn required_date(df: &DataFrame, column: &str, row_idx: usize) -> PolarsResult<NaiveDate> {
        Self::date_from_series(df.column(column)?.date()?, row_idx).ok_or_else(|| {
            PolarsError::ComputeError(format!("row {row_idx} missing {column}").into())
        })
    }

    fn series_from_date(name: &str, date: Option<NaiveDate>) -> PolarsResult<Series> {
        let data: [Option<i32>; 1] = [date.map(Self::date_to_i32)];
        Series::new(name.into(), data).cast(&DataType::Date)
    }

    fn date_from_series(chunked: &DateChunked, row_idx: usize) -> Option<NaiveDate> {
        chunked.get(row_idx).map(Self::date_from_i32)
    }

    pub(crate) fn date_to_i32(date: NaiveDate) -> i32 {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        (date - epoch).num_days() as i32
    }

    pub(crate) fn date_from_i32(days: i32) -> NaiveDate {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        epoch + Duration::days(days as i64)
    }
}
