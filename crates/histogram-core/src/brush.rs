// File: crates/histogram-core/src/brush.rs
// Summary: Brush extent snapping and the per-widget brush state.

use crate::key::Key;
use crate::types::BAR_WIDTH;

/// Snap a pixel coordinate up to the next bar-width boundary.
/// Idempotent: a coordinate already on the grid stays put.
#[inline]
pub fn snap_px(px: f32) -> f32 {
    (px / BAR_WIDTH).ceil() * BAR_WIDTH
}

/// Snap both endpoints of a raw pixel extent to the bar grid.
#[inline]
pub fn snap_extent(extent: (f32, f32)) -> (f32, f32) {
    (snap_px(extent.0), snap_px(extent.1))
}

/// Active selection on one widget, in both coordinate spaces.
#[derive(Clone, Copy, Debug)]
pub struct BrushState {
    /// Snapped pixel extent.
    pub extent_px: (f32, f32),
    /// Half-open key range the extent inverts to.
    pub extent_keys: (Key, Key),
}

/// Outcome of snapping a raw drag extent.
///
/// A degenerate extent (both endpoints snap to the same boundary) means "no
/// filter", never a filter to an empty range.
#[derive(Clone, Copy, Debug)]
pub enum SnappedBrush {
    Clear,
    Range { px: (f32, f32), keys: (Key, Key) },
}
