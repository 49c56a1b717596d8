//! Layout constraints for the scroll viewport.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};

/// Layout constraints that specify minimum and maximum sizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Minimum width
    pub min_width: f32,
    /// Maximum width
    pub max_width: f32,
    /// Minimum height
    pub min_height: f32,
    /// Maximum height
    pub max_height: f32,
}

impl Constraints {
    /// Create new constraints.
    #[must_use]
    pub const fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Create loose constraints that allow any size up to the given maximum.
    #[must_use]
    pub const fn loose(size: Size) -> Self {
        Self::new(0.0, size.width, 0.0, size.height)
    }

    /// Create unbounded constraints.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self::new(0.0, f32::INFINITY, 0.0, f32::INFINITY)
    }

    /// Constrain a size to fit within these constraints.
    #[must_use]
    pub fn constrain(&self, size: Size) -> Size {
        Size::new(
            size.width.clamp(self.min_width, self.max_width),
            size.height.clamp(self.min_height, self.max_height),
        )
    }

    /// Tighten the maximum width, `None` leaves it untouched.
    ///
    /// Mirrors CSS `max-width`: an unset cap applies no constraint.
    #[must_use]
    pub fn cap_width(&self, max_width: Option<f32>) -> Self {
        match max_width {
            Some(cap) => Self::new(
                self.min_width.min(cap),
                self.max_width.min(cap),
                self.min_height,
                self.max_height,
            ),
            None => *self,
        }
    }

    /// Tighten the maximum height, `None` leaves it untouched.
    #[must_use]
    pub fn cap_height(&self, max_height: Option<f32>) -> Self {
        match max_height {
            Some(cap) => Self::new(
                self.min_width,
                self.max_width,
                self.min_height.min(cap),
                self.max_height.min(cap),
            ),
            None => *self,
        }
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}
