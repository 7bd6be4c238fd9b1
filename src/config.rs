use std::path::PathBuf;

use crate::render::GanttTheme;
use crate::schema::ColumnMap;

/// Everything the pipeline needs for one run: where the schedule lives, how
/// its columns are labelled, and how the chart should look. Built once at
/// invocation time and passed in; the transform itself holds no globals.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub source_path: PathBuf,
    pub columns: ColumnMap,
    pub chart: ChartConfig,
}

impl PipelineConfig {
    pub fn new(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
            columns: ColumnMap::default(),
            chart: ChartConfig::default(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::new("dados/cronograma.csv")
    }
}

/// Presentation settings for the rendered dashboard page.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Browser tab title.
    pub page_title: String,
    /// Heading shown above the chart.
    pub heading: String,
    /// Title drawn inside the chart itself.
    pub chart_title: String,
    /// Width of the plot area in pixels, excluding the label column.
    pub chart_width: u32,
    /// Height of one task row in pixels.
    pub row_height: u32,
    /// Width reserved for task descriptions on the left.
    pub label_width: u32,
    pub theme: GanttTheme,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            page_title: "Cronograma de Execução".to_string(),
            heading: "BFX Engenharia Ltda".to_string(),
            chart_title: "Cronograma de Obra - Gráfico de Gantt".to_string(),
            chart_width: 960,
            row_height: 28,
            label_width: 260,
            theme: GanttTheme::default(),
        }
    }
}
