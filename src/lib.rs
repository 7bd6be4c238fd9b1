pub mod config;
pub mod loader;
pub mod pipeline;
pub mod reconcile;
pub mod render;
pub mod schedule;
pub mod schema;
pub mod task;

#[cfg(feature = "http_api")]
pub mod http_api;

pub use config::{ChartConfig, PipelineConfig};
pub use loader::{LoadError, RawTaskRow};
pub use pipeline::PipelineError;
pub use reconcile::ReconcileError;
pub use render::GanttTheme;
pub use schedule::Schedule;
pub use schema::ColumnMap;
pub use task::TaskRecord;
