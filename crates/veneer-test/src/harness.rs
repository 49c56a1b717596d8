//! Test harness for Veneer scroll views.

use std::collections::VecDeque;
use tracing::trace;
use veneer_core::{Axis, Event, MouseButton, Point, RecordingCanvas, Size, Widget};
use veneer_widgets::{
    AxisGeometry, MemoryHost, ScrollView, ScrollbarConfig, ScrollbarGeometry, ThumbDragged,
};

const TOLERANCE: f32 = 1e-3;

/// Test harness for interacting with a mounted scroll view.
pub struct Harness {
    /// Scroll view under test
    view: ScrollView<MemoryHost>,
    /// Event queue for simulation
    event_queue: VecDeque<Event>,
    /// Current pointer position in client coordinates
    pointer: Point,
    /// Drag messages emitted so far
    dragged: Vec<ThumbDragged>,
}

impl Harness {
    /// Mount a view with the default configuration over a viewport of
    /// `natural` size holding `content`.
    pub fn new(natural: Size, content: Size) -> Self {
        Self::with_config(natural, content, ScrollbarConfig::default())
    }

    /// Mount a view with a configuration.
    pub fn with_config(natural: Size, content: Size, config: ScrollbarConfig) -> Self {
        Self::from_host(MemoryHost::new(natural, content), config)
    }

    /// Mount a view over a prepared host.
    pub fn from_host(host: MemoryHost, config: ScrollbarConfig) -> Self {
        let mut view = ScrollView::new(host, config);
        view.mount();
        Self {
            view,
            event_queue: VecDeque::new(),
            pointer: Point::ORIGIN,
            dragged: Vec::new(),
        }
    }

    // === Event Simulation ===

    /// Scroll the viewport as a user would.
    pub fn scroll_to(&mut self, axis: Axis, offset: f32) -> &mut Self {
        self.view.host().scroll_to(axis, offset);
        self.process_events();
        self
    }

    /// Scroll the page.
    pub fn scroll_window(&mut self, scroll: Point) -> &mut Self {
        self.view.host().scroll_window_to(scroll);
        self.event_queue.push_back(Event::WindowScrolled);
        self.process_events();
        self
    }

    /// Resize the window.
    pub fn resize(&mut self, inner: Size) -> &mut Self {
        self.view.host().resize_window(inner);
        self.event_queue.push_back(Event::Resize {
            width: inner.width,
            height: inner.height,
        });
        self.process_events();
        self
    }

    /// Reflow the page: move the viewport and change its natural size, then
    /// resync as the embedding page would after a layout change.
    pub fn reflow(&mut self, position: Point, natural: Size) -> &mut Self {
        self.view.host().move_to(position);
        self.view.host().set_natural(natural);
        self.view.sync();
        self.process_events();
        self
    }

    /// Move the pointer over the viewport.
    pub fn hover(&mut self) -> &mut Self {
        self.event_queue.push_back(Event::MouseEnter);
        self.process_events();
        self
    }

    /// Move the pointer off the viewport.
    pub fn leave(&mut self) -> &mut Self {
        self.event_queue.push_back(Event::MouseLeave);
        self.process_events();
        self
    }

    /// Press the left button in the middle of a thumb.
    pub fn press_thumb(&mut self, axis: Axis) -> &mut Self {
        if let Some(rect) = self.view.overlay().thumb_rect(axis) {
            self.press_at(rect.center());
        }
        self
    }

    /// Press the left button at a client position.
    pub fn press_at(&mut self, position: Point) -> &mut Self {
        self.pointer = position;
        self.event_queue.push_back(Event::MouseMove { position });
        self.event_queue.push_back(Event::MouseDown {
            position,
            button: MouseButton::Left,
        });
        self.process_events();
        self
    }

    /// Move the pointer relative to its current position.
    pub fn move_pointer_by(&mut self, dx: f32, dy: f32) -> &mut Self {
        self.pointer = Point::new(self.pointer.x + dx, self.pointer.y + dy);
        self.event_queue.push_back(Event::MouseMove {
            position: self.pointer,
        });
        self.process_events();
        self
    }

    /// Release the left button wherever the pointer is.
    pub fn release(&mut self) -> &mut Self {
        self.event_queue.push_back(Event::MouseUp {
            position: self.pointer,
            button: MouseButton::Left,
        });
        self.process_events();
        self
    }

    /// Press a thumb, move along its axis by `delta` and release.
    pub fn drag_thumb(&mut self, axis: Axis, delta: f32) -> &mut Self {
        let step = axis.point(delta, 0.0);
        self.press_thumb(axis)
            .move_pointer_by(step.x, step.y)
            .release()
    }

    /// Unmount the view.
    pub fn unmount(&mut self) -> &mut Self {
        self.view.unmount();
        self
    }

    // === Queries ===

    /// The view under test.
    #[must_use]
    pub fn view(&self) -> &ScrollView<MemoryHost> {
        &self.view
    }

    /// The in-memory host.
    #[must_use]
    pub fn host(&self) -> &MemoryHost {
        self.view.host()
    }

    /// Current geometry.
    #[must_use]
    pub fn geometry(&self) -> Option<&ScrollbarGeometry> {
        self.view.geometry()
    }

    /// Viewport scroll offset along an axis.
    #[must_use]
    pub fn scroll(&self, axis: Axis) -> f32 {
        axis.of_point(self.host().scroll())
    }

    /// Drag messages emitted so far.
    #[must_use]
    pub fn dragged(&self) -> &[ThumbDragged] {
        &self.dragged
    }

    /// Paint the view into a fresh recording canvas.
    #[must_use]
    pub fn paint(&self) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::new();
        self.view.paint(&mut canvas);
        canvas
    }

    fn axis_geometry(&self, axis: Axis) -> AxisGeometry {
        match self.geometry() {
            Some(g) => *g.get(axis),
            None => panic!("Expected scrollbar geometry but the view has none"),
        }
    }

    // === Assertions ===

    /// Assert the viewport scroll offset.
    ///
    /// # Panics
    ///
    /// Panics if the offset differs.
    pub fn assert_scroll(&self, axis: Axis, expected: f32) -> &Self {
        let actual = self.scroll(axis);
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "Expected {axis} scroll {expected} but got {actual}"
        );
        self
    }

    /// Assert the thumb offset within its track.
    ///
    /// # Panics
    ///
    /// Panics if the offset differs or there is no geometry.
    pub fn assert_thumb_offset(&self, axis: Axis, expected: f32) -> &Self {
        let actual = self.axis_geometry(axis).thumb.offset;
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "Expected {axis} thumb offset {expected} but got {actual}"
        );
        self
    }

    /// Assert the thumb length.
    ///
    /// # Panics
    ///
    /// Panics if the length differs or there is no geometry.
    pub fn assert_thumb_length(&self, axis: Axis, expected: f32) -> &Self {
        let actual = self.axis_geometry(axis).thumb.length;
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "Expected {axis} thumb length {expected} but got {actual}"
        );
        self
    }

    /// Assert the fixed track position.
    ///
    /// # Panics
    ///
    /// Panics if the position differs or there is no geometry.
    pub fn assert_track_position(&self, axis: Axis, expected: Point) -> &Self {
        let actual = self.axis_geometry(axis).track.position;
        assert!(
            (actual.x - expected.x).abs() < TOLERANCE && (actual.y - expected.y).abs() < TOLERANCE,
            "Expected {axis} track at {expected:?} but got {actual:?}"
        );
        self
    }

    /// Assert that the thumb spans the whole track.
    ///
    /// # Panics
    ///
    /// Panics if the thumb is shorter than the track.
    pub fn assert_thumb_fills_track(&self, axis: Axis) -> &Self {
        let g = self.axis_geometry(axis);
        assert!(
            (g.thumb.length - g.track.length).abs() < TOLERANCE,
            "Expected {axis} thumb to fill its track ({}) but it is {}",
            g.track.length,
            g.thumb.length
        );
        self
    }

    /// Assert that a drag on `axis` is in progress.
    ///
    /// # Panics
    ///
    /// Panics if no drag, or a drag on another axis, is active.
    pub fn assert_dragging(&self, axis: Axis) -> &Self {
        assert_eq!(
            self.view.dragging_axis(),
            Some(axis),
            "Expected a {axis} drag in progress"
        );
        self
    }

    /// Assert that no drag is in progress.
    ///
    /// # Panics
    ///
    /// Panics if a drag is active.
    pub fn assert_not_dragging(&self) -> &Self {
        assert!(
            !self.view.is_dragging(),
            "Expected no drag but {:?} is dragging",
            self.view.dragging_axis()
        );
        self
    }

    /// Assert the capture mask visibility.
    ///
    /// # Panics
    ///
    /// Panics if the visibility differs.
    pub fn assert_mask_visible(&self, expected: bool) -> &Self {
        assert_eq!(
            self.view.mask_visible(),
            expected,
            "Expected drag mask visible={expected}"
        );
        self
    }

    // === Internal ===

    fn process_events(&mut self) {
        // A scroll write from a drag or a user scroll re-enters as a
        // viewport scroll event, the way the browser dispatches `scroll`.
        if self.view.host().take_scroll_event() {
            self.event_queue.push_back(Event::ViewportScrolled);
        }
        while let Some(event) = self.event_queue.pop_front() {
            trace!(?event, "harness dispatch");
            if let Some(message) = self.view.event(&event) {
                if let Ok(dragged) = message.downcast::<ThumbDragged>() {
                    self.dragged.push(*dragged);
                }
            }
            if self.view.host().take_scroll_event() {
                self.event_queue.push_back(Event::ViewportScrolled);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wide() -> Harness {
        Harness::new(Size::new(800.0, 300.0), Size::new(1600.0, 300.0))
    }

    // =========================================================================
    // Scroll
    // =========================================================================

    #[test]
    fn test_user_scroll_resyncs() {
        let mut h = wide();
        h.scroll_to(Axis::Horizontal, 400.0);
        h.assert_scroll(Axis::Horizontal, 400.0)
            .assert_thumb_offset(Axis::Horizontal, 200.0)
            .assert_thumb_length(Axis::Horizontal, 400.0);
    }

    #[test]
    fn test_no_vertical_overflow_fills_track() {
        wide().assert_thumb_fills_track(Axis::Vertical);
    }

    // =========================================================================
    // Drag
    // =========================================================================

    #[test]
    fn test_drag_thumb_scrolls_and_resyncs() {
        let mut h = wide();
        h.drag_thumb(Axis::Horizontal, 100.0);
        h.assert_scroll(Axis::Horizontal, 200.0)
            .assert_thumb_offset(Axis::Horizontal, 100.0)
            .assert_not_dragging()
            .assert_mask_visible(false);
        assert_eq!(h.dragged().len(), 1);
        assert_eq!(h.dragged()[0].offset, 200.0);
    }

    #[test]
    fn test_press_shows_mask_until_release() {
        let mut h = wide();
        h.press_thumb(Axis::Horizontal);
        h.assert_dragging(Axis::Horizontal).assert_mask_visible(true);
        // Far outside the viewport; the mask still tracks it.
        h.move_pointer_by(0.0, 5000.0);
        h.assert_dragging(Axis::Horizontal);
        h.release();
        h.assert_not_dragging();
    }

    #[test]
    fn test_vertical_thumb_press_does_not_drag_by_default() {
        let mut h = Harness::new(Size::new(800.0, 300.0), Size::new(1600.0, 1200.0));
        h.press_thumb(Axis::Vertical).move_pointer_by(0.0, 50.0);
        h.assert_not_dragging()
            .assert_scroll(Axis::Vertical, 0.0)
            .assert_scroll(Axis::Horizontal, 0.0);
    }

    #[test]
    fn test_unmount_mid_drag() {
        let mut h = wide();
        h.press_thumb(Axis::Horizontal);
        h.unmount();
        h.move_pointer_by(100.0, 0.0).release();
        h.assert_not_dragging().assert_scroll(Axis::Horizontal, 0.0);
        assert!(h.geometry().is_none());
    }

    #[test]
    #[should_panic(expected = "Expected horizontal scroll 10")]
    fn test_assert_scroll_panics_on_mismatch() {
        wide().assert_scroll(Axis::Horizontal, 10.0);
    }
}
