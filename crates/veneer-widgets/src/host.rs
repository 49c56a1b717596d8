//! The element a scroll view is attached to.
//!
//! [`ScrollHost`] is the seam between the scrollbar logic and whatever owns
//! the real scrollable element. The browser runtime implements it over a DOM
//! element; [`MemoryHost`] simulates one for tests and non-DOM embedders.

use std::cell::Cell;
use veneer_core::{Axis, Constraints, Point, Rect, Size, ViewportMetrics, WindowMetrics};

/// Access to a scrollable viewport and the window around it.
///
/// Methods take `&self`: hosts wrap handles that are mutated through the
/// platform (DOM elements) or through interior mutability.
pub trait ScrollHost {
    /// Current viewport metrics, `None` while the element is unavailable.
    fn metrics(&self) -> Option<ViewportMetrics>;

    /// Current window metrics.
    fn window(&self) -> WindowMetrics;

    /// Current scroll offset along an axis.
    fn scroll_offset(&self, axis: Axis) -> Option<f32> {
        self.metrics().map(|m| m.scroll_offset(axis))
    }

    /// Request a new scroll offset. Hosts clamp to their own scroll range.
    fn set_scroll_offset(&self, axis: Axis, offset: f32);

    /// Apply `max-width` / `max-height` caps to the viewport.
    fn apply_max_size(&self, _max_width: Option<f32>, _max_height: Option<f32>) {}
}

/// In-memory viewport inside a simulated page.
///
/// The viewport's natural size is capped by the applied maximum sizes and its
/// content size determines how far it can scroll. Scroll writes are clamped
/// like a browser clamps `scrollLeft`, and a change raises a pending scroll
/// notification collected with [`MemoryHost::take_scroll_event`].
#[derive(Debug)]
pub struct MemoryHost {
    natural: Cell<Size>,
    content: Cell<Size>,
    max_width: Cell<Option<f32>>,
    max_height: Cell<Option<f32>>,
    /// Document position of the viewport's top-left corner
    position: Cell<Point>,
    window_inner: Cell<Size>,
    page_scroll: Cell<Point>,
    scroll: Cell<Point>,
    attached: Cell<bool>,
    scroll_event: Cell<bool>,
}

impl MemoryHost {
    /// Create a host whose viewport would be `natural` sized without caps and
    /// holds content of size `content`.
    #[must_use]
    pub fn new(natural: Size, content: Size) -> Self {
        Self {
            natural: Cell::new(natural),
            content: Cell::new(content),
            max_width: Cell::new(None),
            max_height: Cell::new(None),
            position: Cell::new(Point::ORIGIN),
            window_inner: Cell::new(Size::new(1280.0, 720.0)),
            page_scroll: Cell::new(Point::ORIGIN),
            scroll: Cell::new(Point::ORIGIN),
            attached: Cell::new(true),
            scroll_event: Cell::new(false),
        }
    }

    /// Place the viewport at a document position.
    #[must_use]
    pub fn at(self, position: Point) -> Self {
        self.position.set(position);
        self
    }

    /// Set the window inner size.
    #[must_use]
    pub fn with_window(self, inner: Size) -> Self {
        self.window_inner.set(inner);
        self
    }

    /// Visible viewport size after caps.
    #[must_use]
    pub fn visible(&self) -> Size {
        Constraints::unbounded()
            .cap_width(self.max_width.get())
            .cap_height(self.max_height.get())
            .constrain(self.natural.get())
    }

    /// Scrollable size, never smaller than the visible size.
    #[must_use]
    pub fn scrollable(&self) -> Size {
        self.content.get().max(&self.visible())
    }

    /// Current scroll offset.
    #[must_use]
    pub fn scroll(&self) -> Point {
        self.scroll.get()
    }

    /// Applied caps as `(max_width, max_height)`.
    #[must_use]
    pub fn max_size(&self) -> (Option<f32>, Option<f32>) {
        (self.max_width.get(), self.max_height.get())
    }

    /// Scroll the viewport the way a user would (wheel, keyboard).
    pub fn scroll_to(&self, axis: Axis, offset: f32) {
        self.set_scroll_offset(axis, offset);
    }

    /// Scroll the page.
    pub fn scroll_window_to(&self, scroll: Point) {
        self.page_scroll.set(scroll);
    }

    /// Resize the window. The viewport keeps its document position.
    pub fn resize_window(&self, inner: Size) {
        self.window_inner.set(inner);
    }

    /// Move the viewport in the document, as a reflow would.
    pub fn move_to(&self, position: Point) {
        self.position.set(position);
    }

    /// Change the natural (uncapped) viewport size.
    pub fn set_natural(&self, natural: Size) {
        self.natural.set(natural);
        self.clamp_scroll();
    }

    /// Replace the content size.
    pub fn set_content(&self, content: Size) {
        self.content.set(content);
        self.clamp_scroll();
    }

    /// Detach the element; metrics become unavailable.
    pub fn detach(&self) {
        self.attached.set(false);
    }

    /// Re-attach a detached element.
    pub fn attach(&self) {
        self.attached.set(true);
    }

    /// Take the pending "scroll offset changed" notification.
    pub fn take_scroll_event(&self) -> bool {
        self.scroll_event.replace(false)
    }

    fn max_scroll(&self) -> Size {
        let visible = self.visible();
        let scrollable = self.scrollable();
        Size::new(
            (scrollable.width - visible.width).max(0.0),
            (scrollable.height - visible.height).max(0.0),
        )
    }

    fn clamp_scroll(&self) {
        let max = self.max_scroll();
        let current = self.scroll.get();
        let clamped = Point::new(
            current.x.clamp(0.0, max.width),
            current.y.clamp(0.0, max.height),
        );
        if clamped != current {
            self.scroll.set(clamped);
            self.scroll_event.set(true);
        }
    }
}

impl ScrollHost for MemoryHost {
    fn metrics(&self) -> Option<ViewportMetrics> {
        if !self.attached.get() {
            return None;
        }
        let visible = self.visible();
        let client = self.position.get() - self.page_scroll.get();
        Some(ViewportMetrics {
            bounds: Rect::from_origin_size(client, visible),
            visible,
            scrollable: self.scrollable(),
            scroll: self.scroll.get(),
        })
    }

    fn window(&self) -> WindowMetrics {
        WindowMetrics::new(self.window_inner.get(), self.page_scroll.get())
    }

    fn set_scroll_offset(&self, axis: Axis, offset: f32) {
        if !self.attached.get() || offset.is_nan() {
            return;
        }
        let max = axis.of_size(self.max_scroll());
        let current = self.scroll.get();
        let main = offset.clamp(0.0, max);
        let next = axis.point(main, axis.cross().of_point(current));
        if next != current {
            self.scroll.set(next);
            self.scroll_event.set(true);
        }
    }

    fn apply_max_size(&self, max_width: Option<f32>, max_height: Option<f32>) {
        self.max_width.set(max_width);
        self.max_height.set(max_height);
        self.clamp_scroll();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> MemoryHost {
        MemoryHost::new(Size::new(1000.0, 300.0), Size::new(1600.0, 900.0))
    }

    #[test]
    fn test_caps_limit_visible_size() {
        let h = host();
        h.apply_max_size(Some(800.0), None);
        assert_eq!(h.visible(), Size::new(800.0, 300.0));
        assert_eq!(h.max_size(), (Some(800.0), None));
    }

    #[test]
    fn test_scrollable_never_below_visible() {
        let h = MemoryHost::new(Size::new(800.0, 300.0), Size::new(100.0, 100.0));
        assert_eq!(h.scrollable(), Size::new(800.0, 300.0));
    }

    #[test]
    fn test_set_scroll_clamps_and_notifies() {
        let h = host();
        h.set_scroll_offset(Axis::Horizontal, 5000.0);
        assert_eq!(h.scroll(), Point::new(600.0, 0.0));
        assert!(h.take_scroll_event());
        assert!(!h.take_scroll_event());

        h.set_scroll_offset(Axis::Horizontal, -20.0);
        assert_eq!(h.scroll().x, 0.0);
    }

    #[test]
    fn test_unchanged_scroll_does_not_notify() {
        let h = host();
        h.set_scroll_offset(Axis::Vertical, 0.0);
        assert!(!h.take_scroll_event());
    }

    #[test]
    fn test_metrics_in_client_coordinates() {
        let h = host().at(Point::new(40.0, 500.0));
        h.scroll_window_to(Point::new(0.0, 200.0));
        let m = h.metrics().unwrap();
        assert_eq!(m.bounds.origin(), Point::new(40.0, 300.0));
        assert_eq!(h.window().scroll, Point::new(0.0, 200.0));
    }

    #[test]
    fn test_detached_host_has_no_metrics() {
        let h = host();
        h.detach();
        assert!(h.metrics().is_none());
        assert!(h.scroll_offset(Axis::Horizontal).is_none());
        h.set_scroll_offset(Axis::Horizontal, 100.0);
        h.attach();
        assert_eq!(h.scroll_offset(Axis::Horizontal), Some(0.0));
    }

    #[test]
    fn test_shrinking_content_clamps_scroll() {
        let h = host();
        h.scroll_to(Axis::Horizontal, 600.0);
        h.take_scroll_event();
        h.set_content(Size::new(1200.0, 900.0));
        assert_eq!(h.scroll().x, 200.0);
        assert!(h.take_scroll_event());
    }
}
