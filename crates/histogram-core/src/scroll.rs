// File: crates/histogram-core/src/scroll.rs
// Summary: Horizontal scrollbar thumb with proportional pan offset.

use crate::types::SCROLLBAR_HEIGHT;

/// Draggable thumb panning a chart wider than its viewport.
///
/// The thumb-to-track ratio equals the viewport-to-content ratio; dragging
/// the thumb by `dx` pans the content by `dx * content / viewport`.
#[derive(Clone, Copy, Debug)]
pub struct Scrollbar {
    graph_width: f32,
    content_width: f32,
    pub thumb_x: f32,
    pub thumb_width: f32,
    pub height: f32,
    /// Current content pan offset in pixels.
    pub offset: f32,
}

impl Scrollbar {
    /// Create the scrollbar, or `None` when the content already fits.
    /// Starts with the thumb flush right and the newest content in view.
    pub fn new(graph_width: f32, content_width: f32) -> Option<Self> {
        if graph_width / content_width >= 1.0 {
            return None;
        }
        let thumb_width = (graph_width / content_width * graph_width).floor();
        Some(Self {
            graph_width,
            content_width,
            thumb_x: graph_width - thumb_width,
            thumb_width,
            height: SCROLLBAR_HEIGHT,
            offset: content_width - graph_width + 1.0,
        })
    }

    /// Move the thumb by `dx` pixels. A move that would push the thumb past
    /// either edge of the track is ignored outright; returns whether the
    /// thumb moved.
    pub fn drag(&mut self, dx: f32) -> bool {
        let moved_x = self.thumb_x + dx;
        if moved_x < 0.0 || moved_x + self.thumb_width > self.graph_width {
            return false;
        }
        self.thumb_x = moved_x;
        self.offset = (moved_x * (self.content_width / self.graph_width)).floor();
        true
    }
}
