use polars::prelude::PlSmallStr;
use polars::prelude::*;

use crate::task::TaskRecord;

/// The reconciled schedule as a columnar table, ready for a renderer.
/// Built once per pipeline run and not mutated afterwards; row order is the
/// source row order and carries the vertical order of the chart.
#[derive(Debug)]
pub struct Schedule {
    df: DataFrame,
}

impl Schedule {
    pub fn new() -> Self {
        let schema = Self::default_schema();
        Self {
            df: DataFrame::empty_with_schema(&schema),
        }
    }

    /// Materialize reconciled records into the columnar table.
    pub fn from_tasks(tasks: &[TaskRecord]) -> PolarsResult<Self> {
        let height = tasks.len();

        let descriptions: Vec<&str> = tasks.iter().map(|t| t.description.as_str()).collect();
        let mut columns: Vec<Column> = Vec::with_capacity(8);
        columns.push(
            Series::new(PlSmallStr::from_static("description"), descriptions).into_column(),
        );

        let date_column = |name: &'static str, values: Vec<Option<i32>>| -> PolarsResult<Column> {
            Ok(Series::new(PlSmallStr::from_static(name), values)
                .cast(&DataType::Date)?
                .into_column())
        };

        columns.push(date_column(
            "planned_start",
            tasks
                .iter()
                .map(|t| Some(TaskRecord::date_to_i32(t.planned_start)))
                .collect(),
        )?);
        columns.push(date_column(
            "planned_end",
            tasks
                .iter()
                .map(|t| Some(TaskRecord::date_to_i32(t.planned_end)))
                .collect(),
        )?);
        columns.push(date_column(
            "actual_start",
            tasks
                .iter()
                .map(|t| t.actual_start.map(TaskRecord::date_to_i32))
                .collect(),
        )?);
        columns.push(date_column(
            "actual_end",
            tasks
                .iter()
                .map(|t| t.actual_end.map(TaskRecord::date_to_i32))
                .collect(),
        )?);
        columns.push(date_column(
            "final_start",
            tasks
                .iter()
                .map(|t| Some(TaskRecord::date_to_i32(t.final_start)))
                .collect(),
        )?);
        columns.push(date_column(
            "final_end",
            tasks
                .iter()
                .map(|t| Some(TaskRecord::date_to_i32(t.final_end)))
                .collect(),
        )?);

        let durations: Vec<i64> = tasks.iter().map(|t| t.duration_days).collect();
        columns.push(Series::new(PlSmallStr::from_static("duration_days"), durations).into_column());

        let df = DataFrame::new(columns)?;
        debug_assert_eq!(df.height(), height);
        Ok(Self { df })
    }

    pub fn dataframe(&self) -> &DataFrame {
        &self.df
    }

    pub fn height(&self) -> usize {
        self.df.height()
    }

    pub fn is_empty(&self) -> bool {
        self.df.height() == 0
    }

    /// Rows as typed records, in table order.
    pub fn tasks(&self) -> PolarsResult<Vec<TaskRecord>> {
        let mut tasks = Vec::with_capacity(self.df.height());
        for row_idx in 0..self.df.height() {
            tasks.push(TaskRecord::from_dataframe_row(&self.df, row_idx)?);
        }
        Ok(tasks)
    }

    fn default_schema() -> Schema {
        Schema::from_iter(vec![
            Field::new("description".into(), DataType::String),
            Field::new("planned_start".into(), DataType::Date),
            Field::new("planned_end".into(), DataType::Date),
            Field::new("actual_start".into(), DataType::Date),
            Field::new("actual_end".into(), DataType::Date),
            Field::new("final_start".into(), DataType::Date),
            Field::new("final_end".into(), DataType::Date),
            Field::new("duration_days".into(), DataType::Int64),
        ])
    }
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new()
    }
}
