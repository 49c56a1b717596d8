//! Input events for widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
///
/// Pointer positions are in whatever coordinate space the host reports;
/// drag handling only uses differences between positions of one gesture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse moved to position
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Mouse entered widget bounds
    MouseEnter,
    /// Mouse left widget bounds
    MouseLeave,
    /// The viewport element's own scroll offset changed
    ViewportScrolled,
    /// The page (window) scrolled
    WindowScrolled,
    /// Window resized
    Resize {
        /// New width
        width: f32,
        /// New height
        height: f32,
    },
}

impl Event {
    /// Whether this event changes layout metrics the scrollbars depend on.
    #[must_use]
    pub const fn is_layout_change(&self) -> bool {
        matches!(
            self,
            Self::ViewportScrolled | Self::WindowScrolled | Self::Resize { .. }
        )
    }
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
    /// Any other button, by DOM code
    Other(i16),
}

impl MouseButton {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub const fn from_dom(code: i16) -> Self {
        match code {
            0 => Self::Left,
            1 => Self::Middle,
            2 => Self::Right,
            other => Self::Other(other),
        }
    }
}
