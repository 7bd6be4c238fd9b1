use std::env;
use std::process;

use gantt_tool::{PipelineConfig, TaskRecord, pipeline, render};

fn print_usage() {
    eprintln!("Usage: cli <schedule.csv> [output.html]");
}

fn render_tasks_as_text_table(tasks: &[TaskRecord]) -> String {
    let headers = [
        "description",
        "final_start",
        "final_end",
        "duration_days",
    ];

    let rows: Vec<[String; 4]> = tasks
        .iter()
        .map(|t| {
            [
                t.description.clone(),
                t.final_start.format("%Y-%m-%d").to_string(),
                t.final_end.format("%Y-%m-%d").to_string(),
                t.duration_days.to_string(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in &rows {
        for (ci, cell) in row.iter().enumerate() {
            if cell.len() > widths[ci] {
                widths[ci] = cell.len();
            }
        }
    }

    let mut sep = String::new();
    sep.push('+');
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');

    out.push('|');
    for (i, name) in headers.iter().enumerate() {
        out.push(' ');
        out.push_str(name);
        let pad = widths[i] - name.len();
        if pad > 0 {
            out.push_str(&" ".repeat(pad));
        }
        out.push(' ');
        out.push('|');
    }
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');

    for row in &rows {
        out.push('|');
        for (ci, cell) in row.iter().enumerate() {
            out.push(' ');
            out.push_str(cell);
            let pad = widths[ci].saturating_sub(cell.len());
            if pad > 0 {
                out.push_str(&" ".repeat(pad));
            }
            out.push(' ');
            out.push('|');
        }
        out.push('\n');
    }

    out.push_str(&sep);
    out.push('\n');
    out
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        print_usage();
        process::exit(2);
    }

    let config = PipelineConfig::new(&args[1]);
    let output = args.get(2).map(String::as_str).unwrap_or("cronograma.html");

    let schedule = match pipeline::run(&config) {
        Ok(schedule) => schedule,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    let tasks = match schedule.tasks() {
        Ok(tasks) => tasks,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    if tasks.is_empty() {
        println!("Schedule is empty; writing a 'no data' chart.");
    } else {
        println!("{}", render_tasks_as_text_table(&tasks));
    }

    if let Err(err) = render::write_html_file(output, &tasks, &config.chart) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
    println!("Wrote {} task(s) to {output}", tasks.len());
}
