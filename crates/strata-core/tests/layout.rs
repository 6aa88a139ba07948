// File: crates/strata-core/tests/layout.rs
// Purpose: Validate stacked window layout, shared time range and container finalization.

mod common;

use common::{approx, at};
use strata_core::scene::Node;
use strata_core::{ChartError, Container, EdgeSpace};

fn two_window_container() -> Container {
    let mut c = Container::new(1200.0, 600.0, 5.0);
    c.add_window("A", EdgeSpace::NONE, 100.0, 1000.0, 50.0, at(15, 0, 0), at(16, 0, 0)).expect("add A");
    c.add_window("B", EdgeSpace::ALL, 0.0, 200.0, 50.0, at(15, 0, 0), at(16, 0, 0)).expect("add B");
    c
}

#[test]
fn padded_window_widens_shared_time_range() {
    let c = two_window_container();
    let want = (at(14, 59, 24), at(16, 0, 36));
    assert_eq!(c.global_time_range(), Some(want));
    for w in c.windows() {
        assert_eq!(w.time_range(), want, "window {}", w.name());
    }
    // A keeps its own request; only the shared range moved.
    assert_eq!(c.window("A").unwrap().requested_time_range(), (at(15, 0, 0), at(16, 0, 0)));
}

#[test]
fn equal_percent_windows_split_available_height() {
    let c = two_window_container();
    let m = c.options().margins;
    let expected = (600.0 - m.top - m.bottom - 5.0) / 2.0;
    let a = c.window("A").unwrap();
    let b = c.window("B").unwrap();
    assert!(approx(a.pixel_height(), expected));
    assert!(approx(b.pixel_height(), expected));
    assert!(approx(a.offset_top(), m.top));
    assert!(approx(b.offset_top(), m.top + a.pixel_height() + 5.0));
}

#[test]
fn value_padding_applies_ten_percent_of_span() {
    let c = two_window_container();
    assert_eq!(c.window("A").unwrap().value_range(), (100.0, 1000.0));
    let (bottom, top) = c.window("B").unwrap().value_range();
    assert!(approx(bottom, -20.0));
    assert!(approx(top, 220.0));
}

#[test]
fn heights_plus_gaps_fill_the_plot_after_every_insertion() {
    let mut c = Container::new(800.0, 500.0, 7.0);
    let m = c.options().margins;
    let stack = [("price", 50.0), ("volume", 25.0), ("osc", 25.0)];
    for (i, (name, pct)) in stack.iter().enumerate() {
        c.add_window(name, EdgeSpace::NONE, 0.0, 10.0, *pct, at(9, 0, 0), at(17, 0, 0)).unwrap();
        let n = i + 1;
        let total_pct: f64 = stack[..n].iter().map(|(_, p)| p).sum();
        let sum: f64 = c.windows().map(|w| w.pixel_height()).sum();
        let avail = 500.0 - m.top - m.bottom - (n as f64 - 1.0) * 7.0;
        assert!(approx(sum, avail * total_pct / 100.0), "after {n} windows");
    }
    let sum: f64 = c.windows().map(|w| w.pixel_height()).sum();
    assert!(approx(sum + 2.0 * 7.0, 500.0 - m.top - m.bottom));

    // Offsets accumulate in insertion order.
    let mut expected = m.top;
    for w in c.windows() {
        assert!(approx(w.offset_top(), expected));
        expected += w.pixel_height() + 7.0;
    }
    assert_eq!(c.window_names(), ["price", "volume", "osc"]);
}

#[test]
fn global_range_is_union_of_requests() {
    let mut c = Container::new(1000.0, 400.0, 5.0);
    c.add_window("a", EdgeSpace::NONE, 0.0, 1.0, 50.0, at(10, 0, 0), at(11, 0, 0)).unwrap();
    c.add_window("b", EdgeSpace::NONE, 0.0, 1.0, 50.0, at(9, 30, 0), at(10, 30, 0)).unwrap();
    assert_eq!(c.global_time_range(), Some((at(9, 30, 0), at(11, 0, 0))));
    c.add_window("c", EdgeSpace::NONE, 0.0, 1.0, 10.0, at(10, 0, 0), at(12, 0, 0)).unwrap();
    assert_eq!(c.global_time_range(), Some((at(9, 30, 0), at(12, 0, 0))));
    assert_eq!(c.window("a").unwrap().time_range(), (at(9, 30, 0), at(12, 0, 0)));
}

#[test]
fn duplicate_name_is_rejected_without_relayout() {
    let mut c = two_window_container();
    let before: Vec<_> = c.windows().map(|w| (w.pixel_height(), w.offset_top())).collect();
    let err = c
        .add_window("A", EdgeSpace::NONE, 0.0, 1.0, 10.0, at(1, 0, 0), at(2, 0, 0))
        .unwrap_err();
    assert_eq!(err, ChartError::DuplicateWindow("A".into()));
    let after: Vec<_> = c.windows().map(|w| (w.pixel_height(), w.offset_top())).collect();
    assert_eq!(before, after);
    assert_eq!(c.window_names().len(), 2);
}

#[test]
fn degenerate_ranges_are_configuration_errors() {
    let mut c = Container::new(1000.0, 400.0, 5.0);
    let e = c.add_window("flat", EdgeSpace::ALL, 5.0, 5.0, 50.0, at(10, 0, 0), at(11, 0, 0)).unwrap_err();
    assert!(matches!(e, ChartError::InvalidValueRange { .. }));
    let e = c.add_window("inv", EdgeSpace::NONE, 9.0, 1.0, 50.0, at(10, 0, 0), at(11, 0, 0)).unwrap_err();
    assert!(matches!(e, ChartError::InvalidValueRange { .. }));
    let e = c.add_window("still", EdgeSpace::NONE, 0.0, 1.0, 50.0, at(10, 0, 0), at(10, 0, 0)).unwrap_err();
    assert!(matches!(e, ChartError::InvalidTimeRange { .. }));
    let e = c.add_window("zero", EdgeSpace::NONE, 0.0, 1.0, 0.0, at(10, 0, 0), at(11, 0, 0)).unwrap_err();
    assert_eq!(e, ChartError::InvalidHeightPercent(0.0));
    assert!(c.window_names().is_empty());
    assert_eq!(c.global_time_range(), None);
}

#[test]
fn init_twice_gives_identical_layout_and_scene() {
    let mut c = two_window_container();
    c.init().unwrap();
    c.complete();
    let layout: Vec<_> = c.windows().map(|w| (w.pixel_height(), w.offset_top(), w.time_range())).collect();
    let scene = c.root().clone();

    c.init().unwrap();
    c.complete();
    let again: Vec<_> = c.windows().map(|w| (w.pixel_height(), w.offset_top(), w.time_range())).collect();
    assert_eq!(layout, again);
    assert_eq!(&scene, c.root());
}

#[test]
fn complete_places_windows_then_decorations() {
    let mut c = two_window_container();
    c.init().unwrap();
    c.complete();
    let children = c.root().children();
    // background, one group per window, decorations last
    assert_eq!(children.len(), 4);
    let left = c.options().margins.left;
    for (node, w) in children[1..3].iter().zip(c.windows()) {
        match node {
            Node::Group(g) => assert_eq!(g.translate(), (left, w.offset_top())),
            other => panic!("expected window group, got {other:?}"),
        }
    }
    match &children[3] {
        Node::Group(g) => assert!(!g.is_empty(), "decorations hold border and labels"),
        other => panic!("expected decorations group, got {other:?}"),
    }
}

#[test]
fn translate_moves_root_only() {
    let mut c = two_window_container();
    c.translate(10.0, 10.0);
    c.translate(10.0, 10.0);
    c.complete();
    assert_eq!(c.root().translate(), (10.0, 10.0));
    assert!(approx(c.window("A").unwrap().offset_top(), c.options().margins.top));
}

#[test]
fn each_edge_flag_pads_only_its_own_side() {
    let mut c = Container::new(1200.0, 600.0, 5.0);
    let (l, r) = (at(15, 0, 0), at(16, 0, 0));
    let flags = [
        ("top", EdgeSpace::NONE.top()),
        ("bottom", EdgeSpace::NONE.bottom()),
        ("left", EdgeSpace::NONE.left()),
        ("right", EdgeSpace::NONE.right()),
    ];
    for (name, space) in flags {
        c.add_window(name, space, 0.0, 100.0, 25.0, l, r).unwrap();
    }
    let w = |n: &str| c.window(n).unwrap();

    assert_eq!(w("top").value_range(), (0.0, 110.0));
    assert_eq!(w("top").requested_time_range(), (l, r));
    assert_eq!(w("bottom").value_range(), (-10.0, 100.0));
    assert_eq!(w("bottom").requested_time_range(), (l, r));

    assert_eq!(w("left").value_range(), (0.0, 100.0));
    assert_eq!(w("left").requested_time_range(), (at(14, 59, 24), r));
    assert_eq!(w("right").value_range(), (0.0, 100.0));
    assert_eq!(w("right").requested_time_range(), (l, at(16, 0, 36)));

    assert_eq!(c.global_time_range(), Some((at(14, 59, 24), at(16, 0, 36))));
}

#[test]
fn gaps_exceeding_plot_height_are_rejected() {
    // 40 px tall: 15 px left after margins, so the third window's second gap overflows.
    let mut c = Container::new(200.0, 40.0, 10.0);
    c.add_window("a", EdgeSpace::NONE, 0.0, 1.0, 33.3, at(10, 0, 0), at(11, 0, 0)).unwrap();
    c.add_window("b", EdgeSpace::NONE, 0.0, 1.0, 33.3, at(10, 0, 0), at(11, 0, 0)).unwrap();
    let before: Vec<_> = c.windows().map(|w| (w.pixel_height(), w.offset_top())).collect();

    let err = c
        .add_window("c", EdgeSpace::NONE, 0.0, 1.0, 33.3, at(10, 0, 0), at(11, 0, 0))
        .unwrap_err();
    assert!(matches!(err, ChartError::Config(_)));
    assert_eq!(c.window_names(), ["a", "b"]);
    let after: Vec<_> = c.windows().map(|w| (w.pixel_height(), w.offset_top())).collect();
    assert_eq!(before, after);

    // Offsets still follow the stored heights.
    let m = c.options().margins;
    let mut expected = m.top;
    for w in c.windows() {
        assert!(w.pixel_height() >= 0.0);
        assert!(approx(w.offset_top(), expected));
        expected += w.pixel_height() + 10.0;
    }
}

#[test]
fn new_clamps_negative_and_nan_sizes_to_zero() {
    let c = Container::new(-10.0, -20.0, -3.0);
    assert_eq!((c.width(), c.height(), c.gap()), (0.0, 0.0, 0.0));
    assert_eq!(c.plot_width(), 0.0);
    assert_eq!(Container::new(100.0, 100.0, f64::NAN).gap(), 0.0);

    let mut empty = Container::new(-10.0, -20.0, 5.0);
    let err = empty
        .add_window("a", EdgeSpace::NONE, 0.0, 1.0, 100.0, at(10, 0, 0), at(11, 0, 0))
        .unwrap_err();
    assert!(matches!(err, ChartError::Config(_)));
}
