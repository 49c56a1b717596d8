//! Testing harness for Veneer scroll views.
//!
//! [`Harness`] drives a [`ScrollView`](veneer_widgets::ScrollView) over a
//! [`MemoryHost`](veneer_widgets::MemoryHost) the way a browser would: user
//! scrolls, page scrolls, resizes and pointer gestures become events, and
//! scroll offsets written by a drag come back as viewport scroll events.
//!
//! ```
//! use veneer_core::{Axis, Size};
//! use veneer_test::Harness;
//!
//! let mut harness = Harness::new(Size::new(800.0, 300.0), Size::new(1600.0, 300.0));
//! harness
//!     .drag_thumb(Axis::Horizontal, 100.0)
//!     .assert_scroll(Axis::Horizontal, 200.0)
//!     .assert_thumb_offset(Axis::Horizontal, 100.0)
//!     .assert_not_dragging();
//! ```

#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::manual_assert)]

mod harness;

pub use harness::Harness;
