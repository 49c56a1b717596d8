//! End-to-end scroll view scenarios driven through the harness.

use proptest::prelude::*;
use veneer_core::{Axis, Point, Rect, Size};
use veneer_test::Harness;
use veneer_widgets::{DragAxes, MemoryHost, ScrollbarConfig};

// =============================================================================
// Layout
// =============================================================================

#[test]
fn test_resize_while_scrolled_reanchors() {
    let host = MemoryHost::new(Size::new(800.0, 500.0), Size::new(2400.0, 500.0))
        .at(Point::new(60.0, 400.0))
        .with_window(Size::new(1280.0, 720.0));
    let mut h = Harness::from_host(host, ScrollbarConfig::default());

    h.scroll_to(Axis::Horizontal, 900.0)
        .assert_track_position(Axis::Horizontal, Point::new(60.0, 720.0))
        .assert_thumb_offset(Axis::Horizontal, 300.0);

    h.resize(Size::new(1024.0, 1080.0))
        .assert_track_position(Axis::Horizontal, Point::new(60.0, 900.0))
        .assert_thumb_offset(Axis::Horizontal, 300.0);

    h.resize(Size::new(700.0, 1080.0))
        .assert_track_position(Axis::Vertical, Point::new(700.0, 400.0));
}

#[test]
fn test_page_scroll_follows_viewport() {
    let host = MemoryHost::new(Size::new(800.0, 300.0), Size::new(1600.0, 300.0))
        .at(Point::new(0.0, 1000.0));
    let mut h = Harness::from_host(host, ScrollbarConfig::default());
    // Below the fold: pinned to the window bottom.
    h.assert_track_position(Axis::Horizontal, Point::new(0.0, 720.0));

    h.scroll_window(Point::new(0.0, 800.0))
        .assert_track_position(Axis::Horizontal, Point::new(0.0, 500.0));
}

#[test]
fn test_reflow_reanchors_tracks() {
    let host = MemoryHost::new(Size::new(800.0, 300.0), Size::new(1600.0, 300.0))
        .at(Point::new(0.0, 100.0));
    let mut h = Harness::from_host(host, ScrollbarConfig::default());
    h.scroll_to(Axis::Horizontal, 400.0)
        .assert_track_position(Axis::Horizontal, Point::new(0.0, 400.0))
        .assert_thumb_offset(Axis::Horizontal, 200.0);

    h.reflow(Point::new(40.0, 200.0), Size::new(600.0, 300.0));
    assert_eq!(
        h.view().viewport_rect(),
        Some(Rect::new(40.0, 200.0, 600.0, 300.0))
    );
    h.assert_track_position(Axis::Horizontal, Point::new(40.0, 500.0))
        .assert_track_position(Axis::Vertical, Point::new(640.0, 200.0))
        .assert_thumb_length(Axis::Horizontal, 225.0)
        .assert_thumb_offset(Axis::Horizontal, 150.0)
        .assert_scroll(Axis::Horizontal, 400.0);
}

#[test]
fn test_max_width_sets_track_and_caps_viewport() {
    let mut h = Harness::with_config(
        Size::new(1200.0, 400.0),
        Size::new(3200.0, 400.0),
        ScrollbarConfig::new().max_width(800.0),
    );
    assert_eq!(h.host().visible().width, 800.0);
    h.assert_thumb_length(Axis::Horizontal, 200.0)
        .assert_thumb_fills_track(Axis::Vertical);
    h.drag_thumb(Axis::Horizontal, 50.0)
        .assert_scroll(Axis::Horizontal, 200.0);
}

// =============================================================================
// Drag
// =============================================================================

#[test]
fn test_drag_800_over_1600_moves_200() {
    let mut h = Harness::new(Size::new(800.0, 300.0), Size::new(1600.0, 300.0));
    h.drag_thumb(Axis::Horizontal, 100.0)
        .assert_scroll(Axis::Horizontal, 200.0);
}

#[test]
fn test_consecutive_drags_start_from_current_offset() {
    let mut h = Harness::new(Size::new(800.0, 300.0), Size::new(1600.0, 300.0));
    h.drag_thumb(Axis::Horizontal, 100.0)
        .drag_thumb(Axis::Horizontal, 50.0)
        .assert_scroll(Axis::Horizontal, 300.0)
        .assert_thumb_offset(Axis::Horizontal, 150.0);
    h.drag_thumb(Axis::Horizontal, -1000.0)
        .assert_scroll(Axis::Horizontal, 0.0);
}

#[test]
fn test_drag_with_nothing_to_scroll_is_noop() {
    let mut h = Harness::new(Size::new(800.0, 300.0), Size::new(800.0, 300.0));
    h.drag_thumb(Axis::Horizontal, 100.0)
        .assert_scroll(Axis::Horizontal, 0.0)
        .assert_thumb_fills_track(Axis::Horizontal);
    assert!(h.dragged().is_empty());
}

#[test]
fn test_vertical_drag_enabled() {
    let mut h = Harness::with_config(
        Size::new(800.0, 300.0),
        Size::new(800.0, 1200.0),
        ScrollbarConfig::new().drag_axes(DragAxes::Both),
    );
    h.drag_thumb(Axis::Vertical, 30.0)
        .assert_scroll(Axis::Vertical, 120.0)
        .assert_thumb_offset(Axis::Vertical, 30.0);
}

#[test]
fn test_hover_controls_fade() {
    let mut h = Harness::new(Size::new(800.0, 300.0), Size::new(1600.0, 300.0));
    assert!(h.paint().commands().iter().all(|c| c.effective_alpha() == 0.0));
    h.hover();
    assert!(h.paint().commands().iter().all(|c| c.effective_alpha() == 1.0));
    h.leave();
    assert!(h.paint().commands().iter().all(|c| c.effective_alpha() == 0.0));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_drag_moves_by_delta_over_ratio(
        visible in 200.0f32..1000.0,
        factor in 1.5f32..6.0,
        delta in 1.0f32..100.0,
    ) {
        let scrollable = visible * factor;
        let mut h = Harness::new(Size::new(visible, 300.0), Size::new(scrollable, 300.0));
        h.drag_thumb(Axis::Horizontal, delta);
        let ratio = visible / scrollable;
        let expected = (delta / ratio).min(scrollable - visible);
        prop_assert!((h.scroll(Axis::Horizontal) - expected).abs() < 1e-2);
    }

    #[test]
    fn prop_thumb_never_leaves_track(offset in 0.0f32..5000.0) {
        let mut h = Harness::new(Size::new(800.0, 300.0), Size::new(4000.0, 300.0));
        h.scroll_to(Axis::Horizontal, offset);
        let g = h.geometry().unwrap().horizontal;
        prop_assert!(g.thumb.offset >= 0.0);
        prop_assert!(g.thumb.offset + g.thumb.length <= g.track.length + 1e-2);
    }
}
