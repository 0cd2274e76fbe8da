// File: crates/histogram-core/tests/scale.rs
// Purpose: Validate axis-type dispatch, date densification, and the bin-width construction error.

use approx::assert_relative_eq;
use chrono::NaiveDate;
use histogram_core::{
    AxisScale, CrossFilter, Dashboard, DateScale, Error, HistogramOptions, Key, LinearScale,
    Margins, Reduce, Viewport, BAR_WIDTH,
};

struct Event {
    date: NaiveDate,
    a: f64,
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn records() -> Vec<Event> {
    vec![
        Event { date: day(2012, 9, 3), a: 50.0 },
        Event { date: day(2012, 9, 3), a: 120.0 },
        Event { date: day(2012, 9, 5), a: 120.0 },
        Event { date: day(2012, 9, 8), a: 230.0 },
        Event { date: day(2012, 9, 10), a: 310.0 },
    ]
}

#[test]
fn date_scale_domain_extends_one_day_past_the_last_key() {
    let scale = DateScale::new(day(2012, 9, 3), day(2012, 9, 10));
    assert_eq!(scale.domain(), (day(2012, 9, 3), day(2012, 9, 11)));
    assert_eq!(scale.bar_count(), 8);
}

#[test]
fn date_widget_renders_one_bar_per_calendar_day() {
    let mut cf = CrossFilter::new(records());
    let dim = cf.dimension("date", |e: &Event| Key::Date(e.date)).expect("dimension");
    let grp = cf.group(dim, |k| k, Reduce::Count);
    let mut board = Dashboard::new(cf);
    let c = board
        .add_histogram(
            "histogram-c",
            grp,
            HistogramOptions::new(Margins::new(20.0, 10.0)),
            Viewport::default(),
        )
        .expect("widget");

    let frame = board.frame(c).expect("frame");
    // 2012-09-03 through 2012-09-10 is 8 calendar days; the gaps render as
    // zero-value bars rather than disappearing.
    assert_eq!(frame.bars.len(), 8);

    let by_day: Vec<(Key, f64)> = frame.bars.iter().map(|b| (b.key, b.value)).collect();
    assert_eq!(
        by_day,
        vec![
            (Key::Date(day(2012, 9, 3)), 2.0),
            (Key::Date(day(2012, 9, 4)), 0.0),
            (Key::Date(day(2012, 9, 5)), 1.0),
            (Key::Date(day(2012, 9, 6)), 0.0),
            (Key::Date(day(2012, 9, 7)), 0.0),
            (Key::Date(day(2012, 9, 8)), 1.0),
            (Key::Date(day(2012, 9, 9)), 0.0),
            (Key::Date(day(2012, 9, 10)), 1.0),
        ]
    );

    for (i, bar) in frame.bars.iter().enumerate() {
        assert_eq!(bar.x, i as f32 * BAR_WIDTH);
        if bar.value == 0.0 {
            assert_eq!(bar.height, 0.0);
        }
    }
}

#[test]
fn linear_widget_without_bin_width_fails_before_rendering() {
    let mut cf = CrossFilter::new(records());
    let dim = cf.dimension("a", |e: &Event| Key::Num(e.a)).expect("dimension");
    let grp = cf.group(dim, |k| k, Reduce::Count);
    let mut board = Dashboard::new(cf);

    let result = board.add_histogram(
        "histogram-a",
        grp,
        HistogramOptions::new(Margins::new(20.0, 10.0)),
        Viewport::default(),
    );
    assert!(matches!(result, Err(Error::MissingBinWidth { .. })));

    // A zero bin width is rejected the same way.
    let result = board.add_histogram(
        "histogram-a",
        grp,
        HistogramOptions::new(Margins::new(20.0, 10.0)).with_bin_width(0.0),
        Viewport::default(),
    );
    assert!(matches!(result, Err(Error::MissingBinWidth { .. })));
}

#[test]
fn linear_scale_spans_one_bin_past_the_greatest_key() {
    let scale = LinearScale::new(0.0, 300.0, 100.0);
    assert_eq!(scale.domain(), (0.0, 400.0));
    // Four bins at one bar each.
    assert_relative_eq!(scale.to_px(400.0), 4.0 * BAR_WIDTH);
}

#[test]
fn pixel_inversion_is_exact_on_the_bar_grid() {
    let linear = AxisScale::Linear(LinearScale::new(0.0, 300.0, 100.0));
    for i in 0..=4 {
        let px = i as f32 * BAR_WIDTH;
        let key = linear.from_px(px);
        assert_eq!(linear.to_px(key), px);
    }

    let date = AxisScale::Date(DateScale::new(day(2012, 9, 3), day(2012, 9, 10)));
    for i in 0..=8 {
        let px = i as f32 * BAR_WIDTH;
        let key = date.from_px(px);
        assert_eq!(date.to_px(key), px);
    }
}
