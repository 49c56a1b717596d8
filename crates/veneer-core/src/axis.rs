//! Scroll axis selection.
//!
//! Every per-axis computation goes through [`Axis`] so the horizontal and
//! vertical scrollbars share one implementation. The axis a scrollbar
//! scrolls along is its *main* axis; the other one is its *cross* axis.

use crate::geometry::{Point, Size};
use serde::{Deserialize, Serialize};

/// A scroll axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Left-right scrolling (`scrollLeft`)
    Horizontal,
    /// Top-bottom scrolling (`scrollTop`)
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// The perpendicular axis.
    #[must_use]
    pub const fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Stable index for per-axis arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Horizontal => 0,
            Self::Vertical => 1,
        }
    }

    /// Component of a point along this axis.
    #[must_use]
    pub const fn of_point(self, point: Point) -> f32 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }

    /// Component of a size along this axis.
    #[must_use]
    pub const fn of_size(self, size: Size) -> f32 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Build a point from a main-axis and a cross-axis component.
    #[must_use]
    pub const fn point(self, main: f32, cross: f32) -> Point {
        match self {
            Self::Horizontal => Point::new(main, cross),
            Self::Vertical => Point::new(cross, main),
        }
    }

    /// Build a size from a main-axis and a cross-axis extent.
    #[must_use]
    pub const fn size(self, main: f32, cross: f32) -> Size {
        match self {
            Self::Horizontal => Size::new(main, cross),
            Self::Vertical => Size::new(cross, main),
        }
    }

    /// Lowercase name, used for CSS class suffixes.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
