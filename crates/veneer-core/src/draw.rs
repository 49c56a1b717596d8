//! Draw commands produced by painting widgets.

use crate::{Color, CornerRadius, Rect};
use serde::{Deserialize, Serialize};

/// Drawing primitive - all rendering reduces to these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Draw a filled rectangle
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Corner radius
        radius: CornerRadius,
        /// Fill color
        color: Color,
    },

    /// Apply opacity
    Opacity {
        /// Alpha value (0.0 - 1.0)
        alpha: f32,
        /// Child command
        child: Box<DrawCommand>,
    },
}

impl DrawCommand {
    /// Create a filled rectangle.
    #[must_use]
    pub const fn filled_rect(bounds: Rect, color: Color) -> Self {
        Self::Rect {
            bounds,
            radius: CornerRadius::ZERO,
            color,
        }
    }

    /// Create a rounded rectangle.
    #[must_use]
    pub const fn rounded_rect(bounds: Rect, radius: f32, color: Color) -> Self {
        Self::Rect {
            bounds,
            radius: CornerRadius::uniform(radius),
            color,
        }
    }

    /// Wrap with opacity.
    #[must_use]
    pub fn with_opacity(self, alpha: f32) -> Self {
        Self::Opacity {
            alpha,
            child: Box::new(self),
        }
    }

    /// Bounds of the innermost rectangle.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rect { bounds, .. } => *bounds,
            Self::Opacity { child, .. } => child.bounds(),
        }
    }

    /// Effective opacity after all wrappers.
    #[must_use]
    pub fn effective_alpha(&self) -> f32 {
        match self {
            Self::Rect { .. } => 1.0,
            Self::Opacity { alpha, child } => alpha * child.effective_alpha(),
        }
    }
}
