// File: crates/histogram-core/src/scale.rs
// Summary: Horizontal key->pixel scales; calendar-day or linear, fixed at construction.

use chrono::{Duration, NaiveDate};

use crate::key::{Key, KeyKind};
use crate::types::BAR_WIDTH;

/// Linear scale over `[lo, hi)` where `hi` is the greatest key plus one bin
/// width. Pixel positions are rounded to whole pixels; one bar per bin.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    lo: f64,
    hi: f64,
    bin_width: f64,
    width_px: f32,
}

impl LinearScale {
    pub fn new(lo: f64, max_key: f64, bin_width: f64) -> Self {
        let hi = max_key + bin_width;
        let width_px = (((hi - lo) / bin_width) * BAR_WIDTH as f64) as f32;
        Self { lo, hi, bin_width, width_px }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        ((((v - self.lo) / (self.hi - self.lo)) as f32) * self.width_px).round()
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        self.lo + (px / self.width_px) as f64 * (self.hi - self.lo)
    }

    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Domain as `(lo, hi)` with `hi` exclusive.
    pub fn domain(&self) -> (f64, f64) {
        (self.lo, self.hi)
    }
}

/// Uniform-time scale over `[first, last + 1 day)` with one fixed-width bar
/// per calendar day. The scale, not the data, determines the bar count, so
/// days absent from the record set still occupy a (zero-height) slot.
#[derive(Clone, Copy, Debug)]
pub struct DateScale {
    lo: NaiveDate,
    /// Exclusive upper bound: one day past the greatest key.
    hi: NaiveDate,
    width_px: f32,
}

impl DateScale {
    pub fn new(first: NaiveDate, last: NaiveDate) -> Self {
        let days = (last - first).num_days();
        let width_px = ((days + 1) as f32) * BAR_WIDTH;
        Self { lo: first, hi: last + Duration::days(1), width_px }
    }

    /// Number of day slots spanned by the domain.
    pub fn bar_count(&self) -> usize {
        (self.hi - self.lo).num_days().max(0) as usize
    }

    /// Domain as `(first, hi)` with `hi` exclusive (one day past the last key).
    pub fn domain(&self) -> (NaiveDate, NaiveDate) {
        (self.lo, self.hi)
    }

    #[inline]
    pub fn to_px(&self, d: NaiveDate) -> f32 {
        let span = (self.hi - self.lo).num_days().max(1) as f32;
        (((d - self.lo).num_days() as f32 / span) * self.width_px).round()
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> NaiveDate {
        let span = (self.hi - self.lo).num_days().max(1) as f64;
        let day = ((px / self.width_px) as f64 * span).floor() as i64;
        self.lo + Duration::days(day)
    }
}

/// Tagged horizontal scale, chosen once from the bucket key kind.
#[derive(Clone, Copy, Debug)]
pub enum AxisScale {
    Linear(LinearScale),
    Date(DateScale),
}

impl AxisScale {
    pub fn kind(&self) -> KeyKind {
        match self {
            AxisScale::Linear(_) => KeyKind::Num,
            AxisScale::Date(_) => KeyKind::Date,
        }
    }

    /// Full chart content width in pixels (bar count times bar width).
    pub fn content_width(&self) -> f32 {
        match self {
            AxisScale::Linear(s) => s.width_px,
            AxisScale::Date(s) => s.width_px,
        }
    }

    /// Domain as `[lo, hi)` keys.
    pub fn domain(&self) -> (Key, Key) {
        match self {
            AxisScale::Linear(s) => (Key::Num(s.lo), Key::Num(s.hi)),
            AxisScale::Date(s) => (Key::Date(s.lo), Key::Date(s.hi)),
        }
    }

    /// Map a key to its pixel position. Key kinds match the scale by
    /// construction; a mismatched key maps to the origin.
    pub fn to_px(&self, key: Key) -> f32 {
        match (self, key) {
            (AxisScale::Linear(s), Key::Num(v)) => s.to_px(v),
            (AxisScale::Date(s), Key::Date(d)) => s.to_px(d),
            _ => 0.0,
        }
    }

    /// Invert a pixel position back to key space. Exact on positions that
    /// lie on the bar grid.
    pub fn from_px(&self, px: f32) -> Key {
        match self {
            AxisScale::Linear(s) => Key::Num(s.from_px(px)),
            AxisScale::Date(s) => Key::Date(s.from_px(px)),
        }
    }
}
