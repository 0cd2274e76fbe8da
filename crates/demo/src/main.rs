// File: crates/demo/src/main.rs
// Summary: Demo wires three cross-filtered histograms and walks brush gestures across them.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use histogram_core::{
    CrossFilter, Dashboard, HistogramOptions, Key, Margins, Reduce, Viewport, WidgetId,
};
use log::info;

struct Event {
    date: NaiveDate,
    a: f64,
    b: f64,
}

fn hundreds(key: Key) -> Key {
    match key {
        Key::Num(v) => Key::Num((v / 100.0).floor() * 100.0),
        other => other,
    }
}

fn main() -> Result<()> {
    env_logger::init();

    // Accept a CSV path from the CLI or fall back to generated events.
    let events = match std::env::args().nth(1) {
        Some(path) => load_events_csv(Path::new(&path))?,
        None => generate_events(1000),
    };
    info!("loaded {} events", events.len());

    let mut cf = CrossFilter::new(events);
    let dim_a = cf.dimension("a", |e: &Event| Key::Num(e.a))?;
    let dim_b = cf.dimension("b", |e: &Event| Key::Num(e.b))?;
    let dim_c = cf.dimension("date", |e: &Event| Key::Date(e.date))?;
    let grp_a = cf.group(dim_a, hundreds, Reduce::Count);
    let grp_b = cf.group(dim_b, hundreds, Reduce::Count);
    let grp_c = cf.group(dim_c, |k| k, Reduce::Count);

    let mut board = Dashboard::new(cf);
    let viewport = Viewport::default();
    let margin = Margins::new(20.0, 10.0);
    let a = board.add_histogram(
        "histogram-a",
        grp_a,
        HistogramOptions::new(margin).with_bin_width(100.0),
        viewport,
    )?;
    let b = board.add_histogram(
        "histogram-b",
        grp_b,
        HistogramOptions::new(margin).with_bin_width(100.0),
        viewport,
    )?;
    let c = board.add_histogram(
        "histogram-c",
        grp_c,
        HistogramOptions::new(margin).with_axis_format(|k| format!("day {k}")),
        viewport,
    )?;

    // Fully-connected triangle: each widget refreshes the other two.
    board.add_relations(a, &[b, c])?;
    board.add_relations(b, &[a, c])?;
    board.add_relations(c, &[a, b])?;
    board.render_all();

    let named = [(a, "a"), (b, "b"), (c, "date")];
    summarize(&board, "initial", &named)?;

    // Drag a selection across chart a, then watch b and c shrink.
    board.brush(a, (45.0, 160.0))?;
    summarize(&board, "after brushing a", &named)?;

    // Narrow it further on the date chart.
    board.brush(c, (95.0, 210.0))?;
    summarize(&board, "after brushing the date chart", &named)?;

    // Collapse the brush on a: a degenerate selection clears its filter.
    board.brush(a, (52.0, 55.0))?;
    summarize(&board, "after collapsing the brush on a", &named)?;

    // Pan chart a if its content outgrew the viewport.
    if board.scroll(a, -20.0)? {
        let frame = board.frame(a)?;
        println!(
            "panned chart a: offset {} px, thumb at {} px",
            frame.pan_offset,
            frame.scrollbar.map(|t| t.x).unwrap_or(0.0)
        );
    }

    Ok(())
}

/// Print each widget's value-axis domain and its non-empty buckets.
fn summarize(board: &Dashboard<Event>, label: &str, widgets: &[(WidgetId, &str)]) -> Result<()> {
    println!("-- {label}");
    for &(id, name) in widgets {
        let frame = board.frame(id)?;
        let shown: Vec<String> = frame
            .bars
            .iter()
            .filter(|bar| bar.value > 0.0)
            .take(8)
            .map(|bar| format!("{}:{}", bar.key, bar.value))
            .collect();
        println!(
            "  {name:<5} y_max {:>6}  bars {} | {}",
            frame.y_max,
            frame.bars.len(),
            shown.join("  ")
        );
    }
    Ok(())
}

/// Load `date,a,b` rows, e.g. `2012-09-03,120,-150`.
fn load_events_csv(path: &Path) -> Result<Vec<Event>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut events = Vec::new();
    for (i, row) in rdr.records().enumerate() {
        let row = row.with_context(|| format!("reading row {}", i + 1))?;
        let date = row
            .get(0)
            .with_context(|| format!("row {}: missing date", i + 1))?;
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .with_context(|| format!("row {}: bad date '{date}'", i + 1))?;
        let a: f64 = row
            .get(1)
            .with_context(|| format!("row {}: missing a", i + 1))?
            .trim()
            .parse()
            .with_context(|| format!("row {}: bad a", i + 1))?;
        let b: f64 = row
            .get(2)
            .with_context(|| format!("row {}: missing b", i + 1))?
            .trim()
            .parse()
            .with_context(|| format!("row {}: bad b", i + 1))?;
        events.push(Event { date, a, b });
    }
    if events.is_empty() {
        anyhow::bail!("no events loaded; check headers/delimiter");
    }
    Ok(events)
}

/// Deterministic stand-in for a real feed: events spread over two months.
fn generate_events(n: usize) -> Vec<Event> {
    let mut state = 0x2545_F491_4F6C_DD1Du64;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    let epoch = NaiveDate::from_ymd_opt(2012, 9, 1).expect("valid epoch");
    (0..n)
        .map(|_| {
            let r = next();
            Event {
                date: epoch + chrono::Duration::days((r % 60) as i64),
                a: ((r >> 8) % 10_000) as f64 - 99.0,
                b: ((r >> 24) % 20_000) as f64 - 9_999.0,
            }
        })
        .collect()
}
