// File: crates/histogram-core/src/widget.rs
// Summary: Histogram widget: layout, tagged scale construction, brush snapping, frame building.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::axis::{self, AxisFormatter};
use crate::brush::{snap_extent, BrushState, SnappedBrush};
use crate::dashboard::WidgetId;
use crate::error::{Error, Result};
use crate::filter::{CrossFilter, DimensionId, GroupId};
use crate::frame::{Bar, Frame, ScrollThumb};
use crate::geometry::RectF;
use crate::key::Key;
use crate::scale::{AxisScale, DateScale, LinearScale};
use crate::scroll::Scrollbar;
use crate::types::{
    Margins, Viewport, BAR_WIDTH, SCROLLBAR_HEIGHT, SCROLLBAR_STROKE, X_AXIS_HEIGHT,
};

/// Per-widget construction options.
pub struct HistogramOptions {
    /// Blank space around the graph: `[horizontal, vertical]`.
    pub margin: Margins,
    /// Key-space width of one bin. Required for numeric keys; ignored for
    /// calendar-day keys, where the bin is one day.
    pub bin_width: Option<f64>,
    /// Optional horizontal tick label formatter.
    pub axis_format: Option<AxisFormatter>,
}

impl HistogramOptions {
    pub fn new(margin: Margins) -> Self {
        Self { margin, bin_width: None, axis_format: None }
    }

    pub fn with_bin_width(mut self, bin_width: f64) -> Self {
        self.bin_width = Some(bin_width);
        self
    }

    pub fn with_axis_format(mut self, format: impl Fn(&Key) -> String + 'static) -> Self {
        self.axis_format = Some(Box::new(format));
        self
    }
}

/// One brushable histogram bound to a cross-filter group.
///
/// The widget owns layout, scale, brush and scrollbar state plus the last
/// rendered [`Frame`]. It never mutates the shared filter itself; the
/// [`Dashboard`](crate::Dashboard) mediates brush gestures and the
/// re-render cascade across related widgets.
pub struct Histogram {
    name: String,
    dimension: DimensionId,
    group: GroupId,
    scale: AxisScale,
    axis_format: Option<AxisFormatter>,
    graph: RectF,
    graph_height: f32,
    brush: Option<BrushState>,
    scrollbar: Option<Scrollbar>,
    relations: Vec<WidgetId>,
    frame: Frame,
}

impl Histogram {
    /// Build a widget over `group`'s buckets.
    ///
    /// The axis kind is decided here, once: date-valued bucket keys get a
    /// uniform-time scale spanning `[first, last + 1 day)`; numeric keys get
    /// a linear scale over `[min, max + bin_width)` and *require*
    /// `options.bin_width`. Fails fast, before anything renders.
    pub fn new<R>(
        name: impl Into<String>,
        group: GroupId,
        options: HistogramOptions,
        viewport: Viewport,
        filter: &CrossFilter<R>,
    ) -> Result<Self> {
        let name = name.into();
        let dimension = group.dimension();
        let all = filter.group_all(group);
        let (first, last) = match (all.first(), all.last()) {
            (Some(&(lo, _)), Some(&(hi, _))) => (lo, hi),
            _ => return Err(Error::EmptyGroup { widget: name }),
        };

        let graph_width = viewport.width - options.margin.horizontal * 2.0;
        // The trailing 1 is the scrollbar stroke width.
        let graph_height = viewport.height
            - options.margin.vertical * 2.0
            - SCROLLBAR_HEIGHT
            - X_AXIS_HEIGHT
            - SCROLLBAR_STROKE;

        let scale = match (first, last) {
            (Key::Date(lo), Key::Date(hi)) => AxisScale::Date(DateScale::new(lo, hi)),
            (Key::Num(lo), Key::Num(hi)) => {
                // A zero bin width is as unusable as an absent one.
                let bin_width = match options.bin_width {
                    Some(w) if w > 0.0 => w,
                    _ => return Err(Error::MissingBinWidth { widget: name }),
                };
                AxisScale::Linear(LinearScale::new(lo, hi, bin_width))
            }
            _ => {
                return Err(Error::MixedKeyKinds {
                    name: filter.dimension_name(dimension).to_string(),
                })
            }
        };

        let scrollbar = Scrollbar::new(graph_width, scale.content_width());
        let graph = RectF::from_ltwh(
            options.margin.horizontal,
            options.margin.vertical,
            graph_width,
            graph_height,
        );

        Ok(Self {
            name,
            dimension,
            group,
            scale,
            axis_format: options.axis_format,
            graph,
            graph_height,
            brush: None,
            scrollbar,
            relations: Vec::new(),
            frame: Frame { graph, ..Frame::default() },
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dimension(&self) -> DimensionId {
        self.dimension
    }

    pub fn group(&self) -> GroupId {
        self.group
    }

    pub fn scale(&self) -> &AxisScale {
        &self.scale
    }

    pub fn brush(&self) -> Option<&BrushState> {
        self.brush.as_ref()
    }

    pub fn relations(&self) -> &[WidgetId] {
        &self.relations
    }

    /// Last rendered frame; empty until the first `render`.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub(crate) fn set_relations(&mut self, relations: Vec<WidgetId>) {
        self.relations = relations;
    }

    /// Recompute the value-axis domain and rebuild the frame from the
    /// group's current aggregates.
    ///
    /// Bar heights equal the aggregate values at this moment; nothing keeps
    /// them current afterwards except another call.
    pub fn render<R>(&mut self, filter: &CrossFilter<R>) -> &Frame {
        let all = filter.group_all(self.group);
        let y_max = all.iter().fold(0.0_f64, |m, &(_, v)| m.max(v));
        let span = if y_max > 0.0 { y_max } else { 1.0 };
        let gh = self.graph_height;
        let bar_width = BAR_WIDTH - 1.0;

        let mut bars = Vec::new();
        match self.scale {
            AxisScale::Date(s) => {
                let values: BTreeMap<NaiveDate, f64> = all
                    .iter()
                    .filter_map(|&(k, v)| k.as_date().map(|d| (d, v)))
                    .collect();
                let (lo, _) = s.domain();
                for i in 0..s.bar_count() {
                    let day = lo + Duration::days(i as i64);
                    let value = values.get(&day).copied().unwrap_or(0.0);
                    let height = ((value / span) as f32) * gh;
                    bars.push(Bar {
                        key: Key::Date(day),
                        value,
                        x: s.to_px(day),
                        width: bar_width,
                        y: gh - height,
                        height,
                    });
                }
            }
            AxisScale::Linear(_) => {
                for &(key, value) in &all {
                    let height = ((value / span) as f32) * gh;
                    bars.push(Bar {
                        key,
                        value,
                        x: self.scale.to_px(key),
                        width: bar_width,
                        y: gh - height,
                        height,
                    });
                }
            }
        }

        self.frame = Frame {
            graph: self.graph,
            y_max,
            bars,
            x_ticks: axis::x_ticks(&self.scale, self.axis_format.as_ref()),
            y_ticks: axis::y_ticks(y_max, gh),
            brush_clip: self.brush.map(|b| self.clip_rect(b.extent_px)),
            pan_offset: self.scrollbar.map(|s| s.offset).unwrap_or(0.0),
            scrollbar: self.scrollbar.map(|s| ScrollThumb {
                x: s.thumb_x,
                width: s.thumb_width,
                height: s.height,
            }),
        };
        &self.frame
    }

    /// Snap a raw drag extent to the bar grid and decide its outcome.
    pub(crate) fn snap(&self, extent_px: (f32, f32)) -> SnappedBrush {
        let (s0, s1) = snap_extent(extent_px);
        if s0 == s1 {
            SnappedBrush::Clear
        } else {
            SnappedBrush::Range {
                px: (s0, s1),
                keys: (self.scale.from_px(s0), self.scale.from_px(s1)),
            }
        }
    }

    /// Record an active brush and resize the reveal clip in place. The
    /// widget's bars are left alone; its own filter never changes what its
    /// group reports.
    pub(crate) fn set_brush(&mut self, px: (f32, f32), keys: (Key, Key)) {
        self.brush = Some(BrushState { extent_px: px, extent_keys: keys });
        self.frame.brush_clip = Some(self.clip_rect(px));
    }

    pub(crate) fn clear_brush(&mut self) {
        self.brush = None;
        self.frame.brush_clip = None;
    }

    /// Drag the scrollbar thumb; pans the content and clip window in
    /// lockstep. Returns whether the thumb moved.
    pub(crate) fn scroll_by(&mut self, dx: f32) -> bool {
        let Some(sb) = self.scrollbar.as_mut() else {
            return false;
        };
        if !sb.drag(dx) {
            return false;
        }
        self.frame.pan_offset = sb.offset;
        self.frame.scrollbar = Some(ScrollThumb {
            x: sb.thumb_x,
            width: sb.thumb_width,
            height: sb.height,
        });
        true
    }

    fn clip_rect(&self, extent_px: (f32, f32)) -> RectF {
        RectF::from_ltwh(extent_px.0, 0.0, extent_px.1 - extent_px.0, self.graph_height)
    }
}
