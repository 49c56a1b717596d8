//! Core types and traits for the Veneer overlay scrollbar widget.
//!
//! This crate provides foundational types used throughout Veneer:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Axis selection: [`Axis`]
//! - Layout measurements: [`ViewportMetrics`], [`WindowMetrics`]
//! - Color representation: [`Color`]
//! - Layout constraints: [`Constraints`]
//! - Events: [`Event`], [`MouseButton`]
//! - Rendering seams: [`Widget`], [`Brick`], [`Canvas`], [`RecordingCanvas`]

mod axis;
mod canvas;
mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
mod metrics;
pub mod widget;

pub use axis::Axis;
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::DrawCommand;
pub use event::{Event, MouseButton};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use metrics::{ViewportMetrics, WindowMetrics};
pub use widget::{Brick, Canvas, LayoutResult, Widget};
