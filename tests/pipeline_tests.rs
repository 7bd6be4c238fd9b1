use std::io::Write;

use chrono::NaiveDate;
use gantt_tool::{ColumnMap, PipelineConfig, PipelineError, pipeline, render};
use tempfile::NamedTempFile;

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn write_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

const HEADER: &str =
    "Descrição dos Serviços,Início Previsto,Término Previsto,Início Real,Término Real\n";

#[test]
fn csv_to_reconciled_table() {
    let file = write_csv(&format!(
        "{HEADER}\
         Terraplanagem,2024-01-01,2024-01-10,,\n\
         Fundações,2024-01-01,2024-01-10,2024-01-03,\n"
    ));

    let config = PipelineConfig::new(file.path());
    let schedule = pipeline::run(&config).unwrap();
    let tasks = schedule.tasks().unwrap();

    assert_eq!(tasks.len(), 2);

    // Row 1: pure plan, duration from planned interval
    assert_eq!(tasks[0].final_start, d(2024, 1, 1));
    assert_eq!(tasks[0].final_end, d(2024, 1, 10));
    assert_eq!(tasks[0].duration_days, 9);

    // Row 2: actual start overrides, end falls back to plan
    assert_eq!(tasks[1].final_start, d(2024, 1, 3));
    assert_eq!(tasks[1].final_end, d(2024, 1, 10));
    assert_eq!(tasks[1].duration_days, 7);

    // Source order survives into the table
    assert_eq!(tasks[0].description, "Terraplanagem");
    assert_eq!(tasks[1].description, "Fundações");
}

#[test]
fn malformed_planned_date_aborts_whole_run() {
    let file = write_csv(&format!(
        "{HEADER}\
         Ok,2024-01-01,2024-01-10,,\n\
         Quebrada,2024-01-01,amanhã,,\n\
         Nunca processada,2024-02-01,2024-02-10,,\n"
    ));

    let config = PipelineConfig::new(file.path());
    match pipeline::run(&config) {
        Err(PipelineError::Reconcile(err)) => {
            let message = err.to_string();
            assert!(message.contains("planned_end"), "unexpected message: {message}");
            assert!(message.contains("amanhã"), "unexpected message: {message}");
        }
        Err(other) => panic!("expected Reconcile error, got {other:?}"),
        Ok(_) => panic!("expected malformed planned date to abort the run"),
    }
}

#[test]
fn empty_source_gives_empty_schedule() {
    let file = write_csv(HEADER);

    let config = PipelineConfig::new(file.path());
    let schedule = pipeline::run(&config).unwrap();
    assert!(schedule.is_empty());
    assert!(schedule.tasks().unwrap().is_empty());
}

#[test]
fn missing_column_is_a_load_error() {
    let file = write_csv("Descrição dos Serviços,Início Previsto\nTask,2024-01-01\n");

    let config = PipelineConfig::new(file.path());
    match pipeline::run(&config) {
        Err(PipelineError::Load(err)) => {
            assert!(err.to_string().contains("Término Previsto"));
        }
        other => panic!("expected Load error, got {other:?}"),
    }
}

#[test]
fn missing_source_file_is_a_load_error() {
    let config = PipelineConfig::new("/nonexistent/cronograma.csv");
    match pipeline::run(&config) {
        Err(PipelineError::Load(_)) => {}
        other => panic!("expected Load error, got {other:?}"),
    }
}

#[test]
fn custom_column_map_reads_english_headers() {
    let file = write_csv(
        "Task,Planned Start,Planned End,Actual Start,Actual End\n\
         Excavation,2024-01-01,2024-01-05,,\n",
    );

    let mut config = PipelineConfig::new(file.path());
    config.columns = ColumnMap {
        description: "Task".into(),
        planned_start: "Planned Start".into(),
        planned_end: "Planned End".into(),
        actual_start: "Actual Start".into(),
        actual_end: "Actual End".into(),
    };

    let schedule = pipeline::run(&config).unwrap();
    let tasks = schedule.tasks().unwrap();
    assert_eq!(tasks[0].description, "Excavation");
    assert_eq!(tasks[0].duration_days, 4);
}

#[test]
fn pipeline_output_renders_to_html_file() {
    let file = write_csv(&format!(
        "{HEADER}\
         Cobertura,2024-03-01,2024-03-20,05/03/2024,\n"
    ));

    let config = PipelineConfig::new(file.path());
    let schedule = pipeline::run(&config).unwrap();
    let tasks = schedule.tasks().unwrap();

    let out = NamedTempFile::new().unwrap();
    render::write_html_file(out.path(), &tasks, &config.chart).unwrap();

    let html = std::fs::read_to_string(out.path()).unwrap();
    assert!(html.contains("Cobertura"));
    assert!(html.contains("BFX Engenharia Ltda"));
    // Brazilian day-first actual start was accepted and overrides the plan
    assert!(html.contains("05/03/2024 → 20/03/2024"));
}
