//! Errors raised while mounting scrollbars onto a DOM element.

use thiserror::Error;
use veneer_widgets::ConfigError;

/// Mount failure.
#[derive(Debug, Error)]
pub enum MountError {
    /// No global `window` (not running in a browser).
    #[error("No window")]
    NoWindow,

    /// The window has no document.
    #[error("No document")]
    NoDocument,

    /// No element with the given ID.
    #[error("Element '{0}' not found")]
    ElementNotFound(String),

    /// The element (or a generated overlay part) is not an `HTMLElement`.
    #[error("Element '{0}' is not an HTML element")]
    NotAnHtmlElement(String),

    /// The scrollbar configuration was rejected.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A DOM call threw.
    #[error("DOM error: {0}")]
    Dom(String),
}

#[cfg(target_arch = "wasm32")]
impl MountError {
    /// Wrap a thrown JS value.
    pub(crate) fn dom(value: &wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<MountError> for wasm_bindgen::JsValue {
    fn from(err: MountError) -> Self {
        Self::from_str(&err.to_string())
    }
}
