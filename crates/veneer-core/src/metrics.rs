//! Layout measurements read from a live viewport.
//!
//! These are snapshots: hosts produce a fresh value on every read and nothing
//! keeps one beyond a single synchronization pass.

use crate::axis::Axis;
use crate::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Scroll and size metrics of the scrollable viewport element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportMetrics {
    /// Border box relative to the window viewport (client coordinates)
    pub bounds: Rect,
    /// Visible size (`offsetWidth` / `offsetHeight`)
    pub visible: Size,
    /// Scrollable content size (`scrollWidth` / `scrollHeight`)
    pub scrollable: Size,
    /// Current scroll offset (`scrollLeft` / `scrollTop`)
    pub scroll: Point,
}

impl ViewportMetrics {
    /// Visible extent along an axis.
    #[must_use]
    pub const fn visible_extent(&self, axis: Axis) -> f32 {
        axis.of_size(self.visible)
    }

    /// Scrollable extent along an axis.
    #[must_use]
    pub const fn scrollable_extent(&self, axis: Axis) -> f32 {
        axis.of_size(self.scrollable)
    }

    /// Scroll offset along an axis.
    #[must_use]
    pub const fn scroll_offset(&self, axis: Axis) -> f32 {
        axis.of_point(self.scroll)
    }

    /// Visible / scrollable for an axis.
    ///
    /// Never exceeds 1.0. An empty scrollable extent yields 1.0 since there is
    /// nothing to scroll.
    #[must_use]
    pub fn ratio(&self, axis: Axis) -> f32 {
        let scrollable = self.scrollable_extent(axis);
        if scrollable <= 0.0 {
            return 1.0;
        }
        (self.visible_extent(axis) / scrollable).min(1.0)
    }

    /// Largest reachable scroll offset along an axis.
    #[must_use]
    pub fn max_scroll(&self, axis: Axis) -> f32 {
        (self.scrollable_extent(axis) - self.visible_extent(axis)).max(0.0)
    }

    /// Whether the content overflows the viewport along an axis.
    #[must_use]
    pub fn overflows(&self, axis: Axis) -> bool {
        self.scrollable_extent(axis) > self.visible_extent(axis)
    }

    /// Client coordinate where the viewport starts along an axis.
    #[must_use]
    pub const fn client_start(&self, axis: Axis) -> f32 {
        axis.of_point(self.bounds.origin())
    }

    /// Client coordinate of the viewport's far edge along an axis.
    #[must_use]
    pub fn client_end(&self, axis: Axis) -> f32 {
        self.client_start(axis) + self.visible_extent(axis)
    }
}

/// Metrics of the browser window hosting the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WindowMetrics {
    /// `innerWidth` / `innerHeight`
    pub inner: Size,
    /// Page scroll (`scrollX` / `scrollY`)
    pub scroll: Point,
}

impl WindowMetrics {
    /// Create window metrics.
    #[must_use]
    pub const fn new(inner: Size, scroll: Point) -> Self {
        Self { inner, scroll }
    }

    /// Inner extent along an axis.
    #[must_use]
    pub const fn extent(&self, axis: Axis) -> f32 {
        axis.of_size(self.inner)
    }

    /// Page scroll along an axis.
    #[must_use]
    pub const fn scroll_offset(&self, axis: Axis) -> f32 {
        axis.of_point(self.scroll)
    }
}
