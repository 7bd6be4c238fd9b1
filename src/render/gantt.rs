//! Standalone HTML Gantt chart.
//!
//! Builds one self-contained page with an embedded SVG timeline: one row per
//! task, top to bottom in table order, bars spanning [final_start, final_end)
//! and filled from the duration color scale. Tasks come in already
//! reconciled; nothing here recomputes dates.

use std::fs;
use std::path::Path;

use chrono::{Datelike, NaiveDate};

use super::RenderError;
use crate::config::ChartConfig;
use crate::task::TaskRecord;

const PADDING: u32 = 16;
const TITLE_HEIGHT: u32 = 36;
const AXIS_HEIGHT: u32 = 24;

/// Render the chart as an SVG document.
///
/// An empty table renders an explicit "no data" panel instead of axes so a
/// blank schedule is visibly blank rather than an error page. The first
/// table row is drawn at the top; timeline axes that grow upward must not be
/// reintroduced here.
pub fn render_svg(tasks: &[TaskRecord], config: &ChartConfig) -> String {
    let theme = &config.theme;
    let width = PADDING * 2 + config.label_width + config.chart_width;

    if tasks.is_empty() {
        let height = PADDING * 2 + TITLE_HEIGHT + 80;
        let mut svg = svg_open(width, height, &theme.page_background);
        svg.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"16\" fill=\"{}\">Nenhuma tarefa para exibir</text>\n",
            width / 2,
            PADDING + TITLE_HEIGHT + 40,
            theme.text_color,
        ));
        svg.push_str("</svg>\n");
        return svg;
    }

    let min_start = tasks.iter().map(|t| t.final_start.min(t.final_end)).min().unwrap();
    let max_end = tasks.iter().map(|t| t.final_end.max(t.final_start)).max().unwrap();
    let span_days = (max_end - min_start).num_days().max(1);
    let px_per_day = config.chart_width as f64 / span_days as f64;

    let min_duration = tasks.iter().map(|t| t.duration_days).min().unwrap();
    let max_duration = tasks.iter().map(|t| t.duration_days).max().unwrap();

    let chart_left = PADDING + config.label_width;
    let chart_top = PADDING + TITLE_HEIGHT + AXIS_HEIGHT;
    let chart_height = tasks.len() as u32 * config.row_height;
    let height = chart_top + chart_height + PADDING;

    let mut svg = svg_open(width, height, &theme.page_background);

    // Plot background
    svg.push_str(&format!(
        "<rect x=\"{chart_left}\" y=\"{chart_top}\" width=\"{}\" height=\"{chart_height}\" fill=\"{}\"/>\n",
        config.chart_width, theme.plot_background,
    ));

    // Title, centered over the whole page like the original dashboard
    svg.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" text-anchor=\"middle\" font-size=\"18\" font-weight=\"bold\" fill=\"{}\">{}</text>\n",
        width / 2,
        PADDING + 20,
        theme.text_color,
        escape(&config.chart_title),
    ));

    // Month gridlines and labels
    for month_start in month_starts(min_start, max_end) {
        let x = chart_left as f64 + (month_start - min_start).num_days() as f64 * px_per_day;
        svg.push_str(&format!(
            "<line x1=\"{x:.1}\" y1=\"{chart_top}\" x2=\"{x:.1}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
            chart_top + chart_height,
            theme.grid_color,
        ));
        svg.push_str(&format!(
            "<text x=\"{x:.1}\" y=\"{}\" text-anchor=\"middle\" font-size=\"12\" fill=\"{}\">{}</text>\n",
            chart_top - 6,
            theme.text_color,
            month_start.format("%m/%Y"),
        ));
    }

    // Task rows: labels on the left, bars in table order from the top
    for (idx, task) in tasks.iter().enumerate() {
        let row_top = chart_top + idx as u32 * config.row_height;
        let bar_y = row_top + 4;
        let bar_height = config.row_height.saturating_sub(8);

        svg.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" text-anchor=\"end\" font-size=\"12\" fill=\"{}\">{}</text>\n",
            chart_left - 8,
            row_top + config.row_height / 2 + 4,
            theme.text_color,
            escape(&task.description),
        ));

        // Inconsistent rows (end before start) still get a bar over the
        // interval they cover; the tooltip carries the negative duration.
        let bar_start = task.final_start.min(task.final_end);
        let bar_days = task.duration_days.abs().max(1);
        let x = chart_left as f64 + (bar_start - min_start).num_days() as f64 * px_per_day;
        let w = (bar_days as f64 * px_per_day).max(2.0);
        let color = config
            .theme
            .scale_color(normalize(task.duration_days, min_duration, max_duration))
            .to_hex();

        svg.push_str(&format!(
            "<rect x=\"{x:.1}\" y=\"{bar_y}\" width=\"{w:.1}\" height=\"{bar_height}\" rx=\"3\" fill=\"{color}\">\
             <title>{}: {} → {} ({} dias)</title></rect>\n",
            escape(&task.description),
            task.final_start.format("%d/%m/%Y"),
            task.final_end.format("%d/%m/%Y"),
            task.duration_days,
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

/// Wrap the SVG chart in a complete dashboard page.
pub fn render_page(tasks: &[TaskRecord], config: &ChartConfig) -> String {
    let theme = &config.theme;
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html lang=\"pt-BR\">\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str(&format!("<title>{}</title>\n", escape(&config.page_title)));
    page.push_str(&format!(
        "<style>body{{background:{};color:{};font-family:sans-serif;margin:24px;}}h1{{font-size:22px;}}</style>\n",
        theme.page_background, theme.text_color,
    ));
    page.push_str("</head>\n<body>\n");
    page.push_str(&format!("<h1>{}</h1>\n", escape(&config.heading)));
    page.push_str(&render_svg(tasks, config));
    page.push_str("</body>\n</html>\n");
    page
}

/// Render the dashboard page and write it to `path`.
pub fn write_html_file<P: AsRef<Path>>(
    path: P,
    tasks: &[TaskRecord],
    config: &ChartConfig,
) -> Result<(), RenderError> {
    fs::write(path, render_page(tasks, config))?;
    Ok(())
}

fn svg_open(width: u32, height: u32, background: &str) -> String {
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\" style=\"background:{background}\">\n"
    )
}

fn normalize(value: i64, min: i64, max: i64) -> f64 {
    if max == min {
        // A flat range has no spread to color by; sit on the middle stop.
        return 0.5;
    }
    (value - min) as f64 / (max - min) as f64
}

/// First-of-month dates falling inside [min, max].
fn month_starts(min: NaiveDate, max: NaiveDate) -> Vec<NaiveDate> {
    let mut ticks = Vec::new();
    let mut year = min.year();
    let mut month = min.month();
    loop {
        let tick = match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(date) => date,
            None => break,
        };
        if tick > max {
            break;
        }
        if tick >= min {
            ticks.push(tick);
        }
        if month == 12 {
            year += 1;
            month = 1;
        } else {
            month += 1;
        }
    }
    ticks
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::GanttTheme;

    fn d(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(description: &str, start: NaiveDate, end: NaiveDate) -> TaskRecord {
        TaskRecord {
            description: description.to_string(),
            planned_start: start,
            planned_end: end,
            actual_start: None,
            actual_end: None,
            final_start: start,
            final_end: end,
            duration_days: (end - start).num_days(),
        }
    }

    #[test]
    fn empty_schedule_renders_no_data_panel() {
        let svg = render_svg(&[], &ChartConfig::default());
        assert!(svg.contains("Nenhuma tarefa para exibir"));
        assert!(!svg.contains("<rect x")); // no bars, no plot area
    }

    #[test]
    fn one_bar_per_task_in_table_order() {
        let tasks = vec![
            task("Primeira etapa", d(2024, 1, 1), d(2024, 1, 10)),
            task("Segunda etapa", d(2024, 1, 11), d(2024, 2, 1)),
        ];
        let svg = render_svg(&tasks, &ChartConfig::default());

        assert_eq!(svg.matches("<title>").count(), 2);
        let first = svg.find("Primeira etapa").unwrap();
        let second = svg.find("Segunda etapa").unwrap();
        assert!(first < second, "row 1 must be drawn before (above) row 2");
    }

    #[test]
    fn negative_duration_still_renders() {
        let mut bad = task("Invertida", d(2024, 3, 10), d(2024, 3, 5));
        bad.duration_days = -5;
        let svg = render_svg(&[bad], &ChartConfig::default());
        assert!(svg.contains("(-5 dias)"));
    }

    #[test]
    fn descriptions_are_xml_escaped() {
        let tasks = vec![task("Corte & aterro <fase 1>", d(2024, 1, 1), d(2024, 1, 2))];
        let svg = render_svg(&tasks, &ChartConfig::default());
        assert!(svg.contains("Corte &amp; aterro &lt;fase 1&gt;"));
        assert!(!svg.contains("Corte & aterro"));
    }

    #[test]
    fn month_ticks_cover_the_span() {
        let ticks = month_starts(d(2024, 1, 15), d(2024, 4, 2));
        assert_eq!(ticks, vec![d(2024, 2, 1), d(2024, 3, 1), d(2024, 4, 1)]);
    }

    #[test]
    fn month_ticks_cross_year_boundary() {
        let ticks = month_starts(d(2024, 11, 20), d(2025, 2, 10));
        assert_eq!(ticks, vec![d(2024, 12, 1), d(2025, 1, 1), d(2025, 2, 1)]);
    }

    #[test]
    fn page_carries_heading_and_tab_title() {
        let html = render_page(&[], &ChartConfig::default());
        assert!(html.contains("<title>Cronograma de Execução</title>"));
        assert!(html.contains("<h1>BFX Engenharia Ltda</h1>"));
    }

    #[test]
    fn flat_duration_range_uses_middle_stop() {
        let theme = GanttTheme::default();
        let color = theme.scale_color(normalize(9, 9, 9));
        assert_eq!(color, theme.scale_mid);
    }
}
