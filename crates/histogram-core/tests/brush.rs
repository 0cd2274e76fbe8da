// File: crates/histogram-core/tests/brush.rs
// Purpose: Validate brush snapping, degenerate-extent clearing, and filter application.

use histogram_core::{
    snap_extent, snap_px, CrossFilter, Dashboard, HistogramOptions, Key, Margins, Reduce,
    Viewport, BAR_WIDTH,
};
use proptest::prelude::*;

struct Event {
    a: f64,
}

fn records() -> Vec<Event> {
    vec![
        Event { a: 50.0 },
        Event { a: 120.0 },
        Event { a: 120.0 },
        Event { a: 230.0 },
        Event { a: 310.0 },
    ]
}

fn hundreds(key: Key) -> Key {
    match key {
        Key::Num(v) => Key::Num((v / 100.0).floor() * 100.0),
        other => other,
    }
}

fn board_with_linear_widget() -> (
    Dashboard<Event>,
    histogram_core::WidgetId,
    histogram_core::DimensionId,
) {
    let mut cf = CrossFilter::new(records());
    let dim_a = cf.dimension("a", |e: &Event| Key::Num(e.a)).expect("dimension a");
    let grp_a = cf.group(dim_a, hundreds, Reduce::Count);
    let mut board = Dashboard::new(cf);
    let a = board
        .add_histogram(
            "histogram-a",
            grp_a,
            HistogramOptions::new(Margins::new(20.0, 10.0)).with_bin_width(100.0),
            Viewport::default(),
        )
        .expect("widget");
    (board, a, dim_a)
}

#[test]
fn snapping_already_snapped_extent_changes_nothing() {
    let snapped = snap_extent((93.0, 217.0));
    assert_eq!(snapped, (100.0, 220.0));
    assert_eq!(snap_extent(snapped), snapped);
}

#[test]
fn degenerate_extent_clears_the_restriction() {
    let (mut board, a, dim_a) = board_with_linear_widget();

    // Establish a real brush first, then collapse it inside one bar.
    board.brush(a, (7.0, 33.0)).expect("brush");
    assert!(board.filter().filter(dim_a).is_some());

    board.brush(a, (12.0, 17.0)).expect("brush");
    assert_eq!(board.filter().filter(dim_a), None);
    assert!(board.widget(a).expect("widget").brush().is_none());
    assert_eq!(board.frame(a).expect("frame").brush_clip, None);
}

#[test]
fn snapped_extent_becomes_a_half_open_key_range() {
    let (mut board, a, dim_a) = board_with_linear_widget();

    // Buckets 0..300 with bin 100 span [0, 400) over 40 px of content.
    board.brush(a, (7.0, 33.0)).expect("brush");

    assert_eq!(
        board.filter().filter(dim_a),
        Some((Key::Num(100.0), Key::Num(400.0)))
    );

    let state = board.widget(a).expect("widget").brush().expect("brush state");
    assert_eq!(state.extent_px, (10.0, 40.0));

    let clip = board.frame(a).expect("frame").brush_clip.expect("clip");
    assert_eq!(clip.left, 10.0);
    assert_eq!(clip.width(), 30.0);
}

#[test]
fn degenerate_brush_means_all_records_pass() {
    let (mut board, a, dim_a) = board_with_linear_widget();

    board.brush(a, (12.0, 17.0)).expect("brush");

    assert_eq!(board.filter().filter(dim_a), None);
    // Every record counts again in every group read.
    let grp_a = board.widget(a).expect("widget").group();
    let total: f64 = board.filter().group_all(grp_a).iter().map(|&(_, v)| v).sum();
    assert_eq!(total, records().len() as f64);
}

proptest! {
    #[test]
    fn snap_is_idempotent(px in 0.0f32..5000.0) {
        let once = snap_px(px);
        prop_assert_eq!(snap_px(once), once);
    }

    #[test]
    fn snapped_coordinates_sit_on_the_bar_grid(px in 0.0f32..5000.0) {
        let snapped = snap_px(px);
        prop_assert_eq!(snapped % BAR_WIDTH, 0.0);
        prop_assert!(snapped >= px);
    }
}
