//! Veneer: custom overlay scrollbars for scrollable elements.
//!
//! The native scrollbars of an element are hidden and replaced by two
//! `position: fixed` tracks whose thumbs follow the element's scroll offset,
//! fade in on hover and can be dragged.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { BetterScrollbar } from './veneer.js';
//!
//! async function main() {
//!     await init();
//!     const bar = BetterScrollbar.mount('list', 800, 1000);
//!     // or: BetterScrollbar.mount_with_config('list', '{"drag_axes": "both"}');
//!     window.addEventListener('beforeunload', () => bar.unmount());
//! }
//! ```

#![allow(
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::needless_pass_by_value,
    clippy::must_use_candidate
)]

pub use veneer_core::*;
pub use veneer_widgets as widgets;

pub mod browser;

#[cfg(target_arch = "wasm32")]
pub use browser::{BetterScrollbar, DomHost};
pub use browser::MountError;
