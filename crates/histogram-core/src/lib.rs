// File: crates/histogram-core/src/lib.rs
// Summary: Core library entry point; exports the cross-filter store and histogram widget API.

pub mod dashboard;
pub mod widget;
pub mod filter;
pub mod key;
pub mod scale;
pub mod axis;
pub mod brush;
pub mod scroll;
pub mod frame;
pub mod grid;
pub mod types;
pub mod geometry;
pub mod error;

pub use dashboard::{Dashboard, WidgetId};
pub use widget::{Histogram, HistogramOptions};
pub use filter::{CrossFilter, DimensionId, GroupId, Reduce};
pub use key::{Key, KeyKind};
pub use scale::{AxisScale, DateScale, LinearScale};
pub use axis::{AxisFormatter, Tick};
pub use brush::{snap_extent, snap_px, BrushState, SnappedBrush};
pub use frame::{Bar, Frame, ScrollThumb};
pub use types::{Margins, Viewport, BAR_WIDTH, SCROLLBAR_HEIGHT, X_AXIS_HEIGHT};
pub use error::{Error, Result};
