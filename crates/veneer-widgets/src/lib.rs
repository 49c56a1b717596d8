//! Overlay scrollbar widget for Veneer.
//!
//! The widget is split along the data flow:
//!
//! - [`track`]: geometry model, metrics in and track/thumb placement out
//! - [`sync`]: recomputes geometry on scroll, page scroll and resize
//! - [`drag`]: turns thumb drags into scroll offsets
//! - [`overlay`]: stylesheet, inline styles, markup and paint commands
//! - [`ScrollView`]: the widget tying them to a [`ScrollHost`]
//!
//! # Example
//!
//! ```
//! use veneer_core::{Axis, Point, Size};
//! use veneer_widgets::{MemoryHost, ScrollView, ScrollbarConfig};
//!
//! let host = MemoryHost::new(Size::new(800.0, 300.0), Size::new(1600.0, 300.0));
//! let mut view = ScrollView::new(host, ScrollbarConfig::default());
//! view.mount();
//!
//! view.begin_drag(Axis::Horizontal, Point::new(100.0, 0.0));
//! view.drag_to(Point::new(200.0, 0.0));
//! view.end_drag();
//! assert_eq!(view.host().scroll().x, 200.0);
//! ```

mod config;
pub mod drag;
mod error;
mod host;
pub mod overlay;
mod scroll_view;
pub mod sync;
pub mod track;

pub use config::ScrollbarConfig;
pub use drag::{DragAxes, DragController, DragState};
pub use error::{ConfigError, ConfigResult};
pub use host::{MemoryHost, ScrollHost};
pub use overlay::{ElementStyle, Overlay};
pub use scroll_view::{ScrollView, ScrollbarsSynced, ThumbDragged};
pub use sync::ScrollSync;
pub use track::{AxisGeometry, ScrollbarGeometry, ThumbState, TrackState};
