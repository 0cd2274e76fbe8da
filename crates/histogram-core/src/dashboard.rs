// File: crates/histogram-core/src/dashboard.rs
// Summary: Widget registry, relation graph, and the brush -> filter -> re-render cascade.

use log::debug;

use crate::brush::SnappedBrush;
use crate::error::{Error, Result};
use crate::filter::{CrossFilter, GroupId};
use crate::frame::Frame;
use crate::types::Viewport;
use crate::widget::{Histogram, HistogramOptions};

/// Identifier of a widget registered on a [`Dashboard`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WidgetId(pub(crate) usize);

/// The page: one shared cross-filter, the widgets over it, and their
/// relation graph.
///
/// Group state is shared and pull-based, so nothing tells a widget its
/// aggregates changed; the dashboard re-renders exactly the brushed
/// widget's relations after each gesture, and the caller wires those
/// relations explicitly, symmetry included: a fully-connected set needs
/// every direction listed.
pub struct Dashboard<R> {
    filter: CrossFilter<R>,
    widgets: Vec<Histogram>,
}

impl<R> Dashboard<R> {
    pub fn new(filter: CrossFilter<R>) -> Self {
        Self { filter, widgets: Vec::new() }
    }

    pub fn filter(&self) -> &CrossFilter<R> {
        &self.filter
    }

    /// Construct a widget over `group` and render its initial frame.
    pub fn add_histogram(
        &mut self,
        name: impl Into<String>,
        group: GroupId,
        options: HistogramOptions,
        viewport: Viewport,
    ) -> Result<WidgetId> {
        let mut widget = Histogram::new(name, group, options, viewport, &self.filter)?;
        widget.render(&self.filter);
        self.widgets.push(widget);
        Ok(WidgetId(self.widgets.len() - 1))
    }

    /// Replace the list of widgets re-rendered when `id`'s brush changes.
    /// One-directional; wire the inverse relations separately if wanted.
    pub fn add_relations(&mut self, id: WidgetId, relations: &[WidgetId]) -> Result<()> {
        for r in relations {
            self.index(*r)?;
        }
        let idx = self.index(id)?;
        self.widgets[idx].set_relations(relations.to_vec());
        Ok(())
    }

    /// Apply a brush gesture on `id` given the raw pixel extent of the
    /// selection.
    ///
    /// Snaps the extent to the bar grid, then either clears the widget's
    /// dimension (degenerate extent) or restricts it to the snapped
    /// half-open key range, and finally re-renders every related widget.
    /// The brushed widget itself is not re-rendered; its group ignores its
    /// own filter, so its bars are already current.
    pub fn brush(&mut self, id: WidgetId, extent_px: (f32, f32)) -> Result<()> {
        let idx = self.index(id)?;
        let dimension = self.widgets[idx].dimension();
        let snapped = self.widgets[idx].snap(extent_px);
        match snapped {
            SnappedBrush::Clear => {
                debug!("brush '{}': degenerate extent, clearing", self.widgets[idx].name());
                self.filter.clear_filter(dimension);
                self.widgets[idx].clear_brush();
            }
            SnappedBrush::Range { px, keys } => {
                debug!(
                    "brush '{}': snapped to [{}, {}) px",
                    self.widgets[idx].name(),
                    px.0,
                    px.1
                );
                self.filter.filter_range(dimension, keys.0, keys.1);
                self.widgets[idx].set_brush(px, keys);
            }
        }
        let relations = self.widgets[idx].relations().to_vec();
        for r in relations {
            if let Some(w) = self.widgets.get_mut(r.0) {
                w.render(&self.filter);
            }
        }
        Ok(())
    }

    /// Drag `id`'s scrollbar thumb by `dx` pixels. Returns whether the
    /// thumb moved (a drag past the track edge is ignored).
    pub fn scroll(&mut self, id: WidgetId, dx: f32) -> Result<bool> {
        let idx = self.index(id)?;
        Ok(self.widgets[idx].scroll_by(dx))
    }

    /// Re-render one widget from the current aggregates.
    pub fn render(&mut self, id: WidgetId) -> Result<&Frame> {
        let idx = self.index(id)?;
        let Self { filter, widgets } = self;
        Ok(widgets[idx].render(filter))
    }

    /// Re-render every widget, e.g. after construction-time wiring.
    pub fn render_all(&mut self) {
        let Self { filter, widgets } = self;
        for w in widgets.iter_mut() {
            w.render(filter);
        }
    }

    pub fn frame(&self, id: WidgetId) -> Result<&Frame> {
        Ok(self.widgets[self.index(id)?].frame())
    }

    pub fn widget(&self, id: WidgetId) -> Result<&Histogram> {
        Ok(&self.widgets[self.index(id)?])
    }

    fn index(&self, id: WidgetId) -> Result<usize> {
        if id.0 < self.widgets.len() {
            Ok(id.0)
        } else {
            Err(Error::UnknownWidget(id.0))
        }
    }
}
