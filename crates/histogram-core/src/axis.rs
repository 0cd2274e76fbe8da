// File: crates/histogram-core/src/axis.rs
// Summary: Tick layout and label formatting for both axes.

use chrono::Duration;

use crate::grid::linspace;
use crate::key::Key;
use crate::scale::AxisScale;
use crate::types::BAR_WIDTH;

/// Caller-supplied label formatter for horizontal axis ticks.
pub type AxisFormatter = Box<dyn Fn(&Key) -> String>;

/// One axis tick: pixel position plus rendered label.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub px: f32,
    pub label: String,
}

/// Cap on the number of ticks laid out per axis.
const MAX_TICKS: usize = 10;

pub fn default_label(key: &Key) -> String {
    key.to_string()
}

fn label_for(key: &Key, format: Option<&AxisFormatter>) -> String {
    match format {
        Some(f) => f(key),
        None => default_label(key),
    }
}

/// Ticks along the horizontal axis, one per bin boundary, thinned to at
/// most [`MAX_TICKS`].
pub(crate) fn x_ticks(scale: &AxisScale, format: Option<&AxisFormatter>) -> Vec<Tick> {
    let mut ticks = Vec::new();
    match scale {
        AxisScale::Date(s) => {
            let bars = s.bar_count();
            let step = (bars / MAX_TICKS).max(1);
            let (lo, _) = s.domain();
            for i in (0..bars).step_by(step) {
                let key = Key::Date(lo + Duration::days(i as i64));
                ticks.push(Tick { px: scale.to_px(key), label: label_for(&key, format) });
            }
        }
        AxisScale::Linear(s) => {
            let bars = (scale.content_width() / BAR_WIDTH).round() as usize;
            let step = (bars / MAX_TICKS).max(1);
            let (lo, _) = s.domain();
            for i in (0..bars).step_by(step) {
                let key = Key::Num(lo + i as f64 * s.bin_width());
                ticks.push(Tick { px: scale.to_px(key), label: label_for(&key, format) });
            }
        }
    }
    ticks
}

/// Ticks along the value axis, evenly spaced over `[0, y_max]`, positioned
/// in graph-local pixels (origin at the top).
pub(crate) fn y_ticks(y_max: f64, graph_height: f32) -> Vec<Tick> {
    let span = if y_max > 0.0 { y_max } else { 1.0 };
    linspace(0.0, y_max.max(0.0), 6)
        .into_iter()
        .map(|v| Tick {
            px: graph_height - ((v / span) as f32) * graph_height,
            label: fmt_value(v),
        })
        .collect()
}

fn fmt_value(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v:.1}")
    }
}
