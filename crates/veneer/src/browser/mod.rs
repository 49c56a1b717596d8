//! Browser runtime for Veneer.
//!
//! This module bridges the scrollbar widget and the DOM: a [`ScrollHost`]
//! over an `HTMLElement`, web event conversion, scoped listeners and the
//! `BetterScrollbar` mount API.
//!
//! [`ScrollHost`]: veneer_widgets::ScrollHost

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod dom;
#[cfg(target_arch = "wasm32")]
pub mod events;
#[cfg(target_arch = "wasm32")]
pub mod listener;

// Cross-platform modules
pub mod error;

#[cfg(target_arch = "wasm32")]
pub use app::BetterScrollbar;
#[cfg(target_arch = "wasm32")]
pub use dom::DomHost;
pub use error::MountError;
#[cfg(target_arch = "wasm32")]
pub use listener::EventListener;
