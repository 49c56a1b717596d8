//! Drag controller: turns a thumb drag into viewport scroll offsets.

use crate::host::ScrollHost;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use veneer_core::{Axis, Point};

/// Which thumbs scroll their axis when dragged.
///
/// `Horizontal` keeps the long-standing behavior where only the horizontal
/// thumb drags; a press on the vertical thumb does nothing. `Both` enables
/// vertical dragging as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragAxes {
    /// Only the horizontal thumb is draggable
    #[default]
    Horizontal,
    /// Both thumbs are draggable
    Both,
}

impl DragAxes {
    /// Whether a thumb on this axis may start a drag.
    #[must_use]
    pub const fn allows(self, axis: Axis) -> bool {
        match self {
            Self::Horizontal => matches!(axis, Axis::Horizontal),
            Self::Both => true,
        }
    }
}

/// State of one drag gesture on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    /// Whether a drag is in progress
    pub dragging: bool,
    /// Pointer coordinate along the axis when the drag began
    pub pointer_start: f32,
    /// Scroll offset along the axis when the drag began
    pub scroll_start: f32,
}

/// Scroll offset reached after moving the pointer from `pointer_start` to
/// `pointer`.
///
/// The thumb moves `ratio` pixels per scrolled pixel, so the pointer delta is
/// divided by `ratio`. Callers guarantee `ratio > 0`.
#[must_use]
pub fn drag_offset(scroll_start: f32, pointer_start: f32, pointer: f32, ratio: f32) -> f32 {
    scroll_start + (pointer - pointer_start) / ratio
}

/// Tracks the active drag gesture.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    states: [DragState; 2],
    axes: DragAxes,
}

impl DragController {
    /// Create a controller for the given draggable axes.
    #[must_use]
    pub fn new(axes: DragAxes) -> Self {
        Self {
            states: [DragState::default(); 2],
            axes,
        }
    }

    /// Draggable axes.
    #[must_use]
    pub const fn axes(&self) -> DragAxes {
        self.axes
    }

    /// State for an axis.
    #[must_use]
    pub const fn state(&self, axis: Axis) -> &DragState {
        &self.states[axis.index()]
    }

    /// Whether any drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.states.iter().any(|s| s.dragging)
    }

    /// Axis of the drag in progress.
    #[must_use]
    pub fn active_axis(&self) -> Option<Axis> {
        Axis::ALL
            .into_iter()
            .find(|axis| self.states[axis.index()].dragging)
    }

    /// Start a drag on `axis` at `pointer` with the viewport scrolled to
    /// `scroll_start`.
    ///
    /// Returns `false` when the axis is not draggable. A new press replaces
    /// any drag already in progress.
    pub fn begin(&mut self, axis: Axis, pointer: Point, scroll_start: f32) -> bool {
        if !self.axes.allows(axis) {
            debug!(axis = %axis, "thumb press ignored, axis not draggable");
            return false;
        }
        self.states = [DragState::default(); 2];
        let state = &mut self.states[axis.index()];
        state.dragging = true;
        state.pointer_start = axis.of_point(pointer);
        state.scroll_start = scroll_start;
        debug!(axis = %axis, pointer = state.pointer_start, scroll = scroll_start, "drag begin");
        true
    }

    /// Move the pointer during a drag and write the resulting offset to the
    /// host.
    ///
    /// The offset is always computed from the drag-start reference. Returns
    /// the requested offset, or `None` when not dragging, when the host is
    /// unavailable, or when there is nothing to scroll.
    pub fn update<H: ScrollHost + ?Sized>(&self, pointer: Point, host: &H) -> Option<(Axis, f32)> {
        let axis = self.active_axis()?;
        let state = &self.states[axis.index()];
        let metrics = host.metrics()?;
        let ratio = metrics.ratio(axis);
        if ratio <= 0.0 || ratio >= 1.0 {
            trace!(axis = %axis, ratio, "drag move skipped");
            return None;
        }
        let offset = drag_offset(
            state.scroll_start,
            state.pointer_start,
            axis.of_point(pointer),
            ratio,
        );
        host.set_scroll_offset(axis, offset);
        trace!(axis = %axis, offset, "drag move");
        Some((axis, offset))
    }

    /// Finish the drag. Returns whether one was in progress.
    pub fn end(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        if was_dragging {
            debug!("drag end");
        }
        self.states = [DragState::default(); 2];
        was_dragging
    }
}
