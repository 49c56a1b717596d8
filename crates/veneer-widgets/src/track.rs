//! Geometry model: maps viewport metrics to track and thumb placement.
//!
//! Everything here is a pure function of one [`ViewportMetrics`] snapshot,
//! one [`WindowMetrics`] snapshot and the configured maximum extents.
//! Positions are client coordinates, matching `position: fixed` overlays.

use crate::config::ScrollbarConfig;
use serde::{Deserialize, Serialize};
use veneer_core::{Axis, Point, ViewportMetrics, WindowMetrics};

/// Fixed placement of one track.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackState {
    /// Client `left` / `top` of the track
    pub position: Point,
    /// Track length along its axis
    pub length: f32,
}

/// Placement of a thumb inside its track.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ThumbState {
    /// Distance from the track start
    pub offset: f32,
    /// Thumb length along the track
    pub length: f32,
}

/// Track and thumb for a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisGeometry {
    /// Axis this geometry belongs to
    pub axis: Axis,
    /// Track placement
    pub track: TrackState,
    /// Thumb placement
    pub thumb: ThumbState,
    /// Visible / scrollable ratio used for both thumb math and dragging
    pub ratio: f32,
}

impl AxisGeometry {
    /// Compute the geometry of one axis.
    ///
    /// `max_len` is the configured cap for this axis. When absent the track
    /// spans the visible extent.
    #[must_use]
    pub fn compute(
        axis: Axis,
        viewport: &ViewportMetrics,
        window: &WindowMetrics,
        max_len: Option<f32>,
    ) -> Self {
        let main = viewport.client_start(axis);
        let cross = cross_position(axis.cross(), viewport, window);
        let length = max_len.unwrap_or_else(|| viewport.visible_extent(axis));
        let ratio = viewport.ratio(axis);

        Self {
            axis,
            track: TrackState {
                position: axis.point(main, cross),
                length,
            },
            thumb: ThumbState {
                offset: viewport.scroll_offset(axis) * ratio,
                length: length * ratio,
            },
            ratio,
        }
    }

    /// Whether the thumb covers the whole track.
    #[must_use]
    pub fn fills_track(&self) -> bool {
        self.ratio >= 1.0
    }
}

/// Where the track sits on the axis perpendicular to it: the viewport's far
/// edge, pulled back to the window edge when the viewport extends past it.
fn cross_position(cross: Axis, viewport: &ViewportMetrics, window: &WindowMetrics) -> f32 {
    let window_extent = window.extent(cross);
    let page_scroll = window.scroll_offset(cross);
    let layout_end = viewport.client_end(cross) + page_scroll;
    let window_end = window_extent + page_scroll;
    window_extent - (window_end - layout_end).max(0.0)
}

/// Geometry of both scrollbars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollbarGeometry {
    /// Horizontal scrollbar
    pub horizontal: AxisGeometry,
    /// Vertical scrollbar
    pub vertical: AxisGeometry,
}

impl ScrollbarGeometry {
    /// Compute both axes from one metrics snapshot.
    #[must_use]
    pub fn compute(
        viewport: &ViewportMetrics,
        window: &WindowMetrics,
        config: &ScrollbarConfig,
    ) -> Self {
        let axis = |axis| AxisGeometry::compute(axis, viewport, window, config.max_extent(axis));
        Self {
            horizontal: axis(Axis::Horizontal),
            vertical: axis(Axis::Vertical),
        }
    }

    /// Geometry for an axis.
    #[must_use]
    pub const fn get(&self, axis: Axis) -> &AxisGeometry {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }
}
