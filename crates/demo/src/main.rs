// File: crates/demo/src/main.rs
// Summary: Demo loads case records from CSV (or a built-in sample) and drives
// the toggle flow against a stdout bar surface.

use anyhow::{Context, Result};
use casechart_core::record::check_ascending;
use casechart_core::{CaseRecord, ChartFrame, ChartPresenter, ChartSurface};
use std::path::Path;

const SAMPLE_YEAR: i32 = 2021;
const BAR_COLS: usize = 40;

fn main() -> Result<()> {
    let records = match std::env::args().nth(1) {
        Some(path) => {
            let records = load_case_csv(Path::new(&path))
                .with_context(|| format!("failed to load CSV '{path}'"))?;
            println!("Loaded {} records from {path}", records.len());
            records
        }
        None => {
            let records = sample_records();
            println!("No CSV given; using {} built-in sample records", records.len());
            records
        }
    };

    if let Err(e) = check_ascending(&records, SAMPLE_YEAR) {
        println!("Warning: {e}");
    }

    let mut presenter = ChartPresenter::new(records, ConsoleSurface);

    println!("\n-- initial (single bar) --");
    presenter.show();

    println!("\n-- after toggle (grouped bars) --");
    presenter.toggle();

    println!("\n-- after second toggle (single again) --");
    presenter.toggle();

    Ok(())
}

/// Stdout surface: one line per x tick, bars scaled to the tallest value.
struct ConsoleSurface;

impl ChartSurface for ConsoleSurface {
    fn display(&mut self, frame: &ChartFrame<'_>) {
        let legend = frame
            .series
            .iter()
            .map(|s| s.label.as_str())
            .collect::<Vec<_>>()
            .join(" | ");
        println!(
            "legend: {legend}   (bar width {}, x range {:.1}..{:.1})",
            frame.layout.bar_width, frame.x_bounds.0, frame.x_bounds.1
        );

        let max = frame
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|&(_, v)| v))
            .fold(0.0f64, f64::max)
            .max(1.0);

        let ticks = frame.series.first().map(|s| s.len()).unwrap_or(0);
        for index in 0..ticks {
            let label = frame.labels.label(index).unwrap_or("?");
            for (slot, series) in frame.series.iter().enumerate() {
                let (_, value) = series.points[index];
                let cols = ((value / max) * BAR_COLS as f64).round() as usize;
                let tick = if slot == 0 { format!("{label:>5}") } else { "     ".to_string() };
                println!("{tick} | {}{} {value}", "#".repeat(cols), " ".repeat(BAR_COLS - cols));
            }
        }
    }

    fn clear(&mut self) {
        println!("(no data)");
    }
}

/// In-memory sample: late-May 2021 daily counts with corrected backfills.
fn sample_records() -> Vec<CaseRecord> {
    vec![
        CaseRecord::new("5/15", 180, 185),
        CaseRecord::new("5/16", 206, 213),
        CaseRecord::new("5/17", 333, 350),
        CaseRecord::new("5/18", 240, 267),
        CaseRecord::new("5/19", 267, 275),
        CaseRecord::new("5/20", 286, 299),
        CaseRecord::new("5/21", 312, 318),
        CaseRecord::new("5/22", 321, 400),
        CaseRecord::new("5/23", 287, 349),
        CaseRecord::new("5/24", 256, 334),
        CaseRecord::new("5/25", 281, 324),
        CaseRecord::new("5/26", 302, 331),
    ]
}

/// Load records from a CSV with date/reported/corrected columns. Header
/// names are sniffed case-insensitively; rows with unparsable counts are
/// skipped.
fn load_case_csv(path: &Path) -> Result<Vec<CaseRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        headers
            .iter()
            .position(|h| names.iter().any(|want| h == want))
    };

    let i_date = idx(&["date", "date_text", "day"]);
    let i_number = idx(&["number", "reported", "cases", "count"]);
    let i_correct = idx(&["correct_number", "corrected", "corrected_cases"]);

    let (i_date, i_number, i_correct) = match (i_date, i_number, i_correct) {
        (Some(d), Some(n), Some(c)) => (d, n, c),
        _ => anyhow::bail!(
            "missing columns; expected date/reported/corrected headers, got {:?}",
            headers
        ),
    };

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let field = |i: usize| rec.get(i).map(str::trim);
        let count = |i: usize| field(i).and_then(|s| s.parse::<u64>().ok());
        if let (Some(date), Some(number), Some(correct)) = (field(i_date), count(i_number), count(i_correct)) {
            out.push(CaseRecord::new(date, number, correct));
        }
    }
    Ok(out)
}
