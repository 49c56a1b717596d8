//! Widget trait and related types.
//!
//! Widgets follow a measure-layout-paint cycle and receive input through
//! [`Widget::event`]. Widgets that render into the DOM additionally implement
//! [`Brick`], which produces the HTML skeleton and scoped CSS for the widget.
//!
//! # Examples
//!
//! ```
//! use veneer_core::{Canvas, Color, RecordingCanvas, Rect};
//!
//! let mut canvas = RecordingCanvas::new();
//! canvas.push_opacity(0.0);
//! canvas.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
//! canvas.pop_opacity();
//! assert_eq!(canvas.command_count(), 1);
//! ```

use crate::constraints::Constraints;
use crate::event::Event;
use crate::geometry::{Rect, Size};
use std::any::Any;

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait.
///
/// Widgets here are driven from a single UI thread, so there is no
/// `Send`/`Sync` bound: browser handles are not thread-safe.
pub trait Widget {
    /// Compute intrinsic size given constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Position self within allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Generate draw commands for rendering.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle input events, optionally emitting a message.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Check if this widget is interactive (can receive pointer events).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// DOM rendering contract.
///
/// Output must be deterministic: the same state yields the same markup.
pub trait Brick {
    /// Get the brick's unique type name
    fn brick_name(&self) -> &'static str;

    /// Generate the HTML for this brick.
    fn to_html(&self) -> String;

    /// Generate the CSS rules for this brick, scoped to avoid conflicts.
    fn to_css(&self) -> String;
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: crate::Color);

    /// Draw a filled rectangle with uniformly rounded corners.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, color: crate::Color);

    /// Push an opacity layer; nested layers multiply.
    fn push_opacity(&mut self, alpha: f32);

    /// Pop the most recent opacity layer.
    fn pop_opacity(&mut self);
}
