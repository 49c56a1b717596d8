//! Scoped DOM event subscriptions.

use super::error::MountError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::EventTarget;

/// An event listener that is removed when dropped.
///
/// Holding the guard keeps the closure alive; dropping it detaches the
/// listener from its target, so a subscription lives exactly as long as the
/// value owning it.
pub struct EventListener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventListener {
    /// Subscribe `handler` to `event_type` on `target`.
    pub fn new<F>(target: &EventTarget, event_type: &'static str, handler: F) -> Result<Self, MountError>
    where
        F: FnMut(web_sys::Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        target
            .add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())
            .map_err(|e| MountError::dom(&e))?;
        Ok(Self {
            target: target.clone(),
            event_type,
            callback,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.callback.as_ref().unchecked_ref())
        {
            web_sys::console::warn_1(&e);
        }
    }
}

impl std::fmt::Debug for EventListener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventListener")
            .field("event_type", &self.event_type)
            .finish_non_exhaustive()
    }
}
