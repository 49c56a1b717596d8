//! WASM entry point: mounts overlay scrollbars onto an existing element.

use super::dom::DomHost;
use super::error::MountError;
use super::events::{is_primary, mouse_event_to_veneer, page_point};
use super::listener::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};
use veneer_core::{Axis, Event};
use veneer_widgets::overlay::{
    mask_selector, scope_selector, thumb_selector, track_selector, SCOPE_ATTRIBUTE,
};
use veneer_widgets::{ElementStyle, ScrollHost, ScrollView, ScrollbarConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, EventTarget, HtmlElement, MouseEvent};

/// Source of stylesheet scope tokens, one per mount.
static NEXT_SCOPE: AtomicU32 = AtomicU32::new(0);

/// Overlay nodes created at mount.
struct Elements {
    viewport: HtmlElement,
    tracks: [HtmlElement; 2],
    thumbs: [HtmlElement; 2],
    mask: HtmlElement,
    stylesheet: Element,
}

impl Elements {
    fn create(
        document: &Document,
        viewport: &HtmlElement,
        view: &ScrollView<DomHost>,
    ) -> Result<Self, MountError> {
        let token = NEXT_SCOPE.fetch_add(1, Ordering::Relaxed);
        viewport
            .set_attribute(SCOPE_ATTRIBUTE, &token.to_string())
            .map_err(|e| MountError::dom(&e))?;

        let overlay = view.overlay();
        viewport
            .insert_adjacent_html("beforeend", &overlay.overlay_html())
            .map_err(|e| MountError::dom(&e))?;

        let stylesheet = document
            .create_element("style")
            .map_err(|e| MountError::dom(&e))?;
        stylesheet.set_text_content(Some(&overlay.stylesheet(&scope_selector(token))));
        let head = document.head().ok_or(MountError::NoDocument)?;
        head.append_child(&stylesheet)
            .map_err(|e| MountError::dom(&e))?;

        let find = |selector: &str| -> Result<HtmlElement, MountError> {
            viewport
                .query_selector(selector)
                .map_err(|e| MountError::dom(&e))?
                .ok_or_else(|| MountError::Dom(format!("overlay part '{selector}' missing")))?
                .dyn_into::<HtmlElement>()
                .map_err(|_| MountError::NotAnHtmlElement(selector.to_string()))
        };

        Ok(Self {
            viewport: viewport.clone(),
            tracks: [
                find(&track_selector(Axis::Horizontal))?,
                find(&track_selector(Axis::Vertical))?,
            ],
            thumbs: [
                find(&thumb_selector(Axis::Horizontal))?,
                find(&thumb_selector(Axis::Vertical))?,
            ],
            mask: find(&mask_selector())?,
            stylesheet,
        })
    }

    fn remove(&self) {
        for track in &self.tracks {
            track.remove();
        }
        self.mask.remove();
        self.stylesheet.remove();
        if let Err(e) = self.viewport.remove_attribute(SCOPE_ATTRIBUTE) {
            web_sys::console::warn_1(&e);
        }
    }
}

fn apply(element: &HtmlElement, declarations: &ElementStyle) {
    let style = element.style();
    for (name, value) in declarations.iter() {
        if let Err(e) = style.set_property(name, value) {
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "veneer: failed to set {name}: {e:?}"
            )));
        }
    }
}

/// Scroll view plus the DOM nodes rendering it.
struct Mounted {
    view: ScrollView<DomHost>,
    elements: Elements,
}

impl Mounted {
    /// Push the current geometry into the overlay's inline styles.
    fn render(&self) {
        let overlay = self.view.overlay();
        for axis in Axis::ALL {
            apply(&self.elements.tracks[axis.index()], &overlay.track_style(axis));
            apply(&self.elements.thumbs[axis.index()], &overlay.thumb_style(axis));
        }
        apply(
            &self.elements.mask,
            &overlay.mask_style(self.view.mask_visible()),
        );
    }
}

type Shared = Rc<RefCell<Mounted>>;

/// Subscribe a handler that gets the mounted state and re-renders after it.
fn listen<F>(
    target: &EventTarget,
    event_type: &'static str,
    state: &Shared,
    mut handler: F,
) -> Result<EventListener, MountError>
where
    F: FnMut(&mut Mounted, &web_sys::Event) + 'static,
{
    let state = Rc::clone(state);
    EventListener::new(target, event_type, move |event| {
        // Re-entrant dispatch (a handler triggering another event) is dropped.
        let Ok(mut mounted) = state.try_borrow_mut() else {
            return;
        };
        handler(&mut mounted, &event);
        mounted.render();
    })
}

/// Overlay scrollbars attached to a scrollable element.
///
/// ```javascript
/// const bar = BetterScrollbar.mount('list', 800, undefined);
/// // ...
/// bar.unmount();
/// ```
#[wasm_bindgen]
pub struct BetterScrollbar {
    state: Shared,
    listeners: Vec<EventListener>,
}

#[wasm_bindgen]
impl BetterScrollbar {
    /// Mount onto the element with `element_id`, optionally capping its size.
    pub fn mount(
        element_id: &str,
        max_width: Option<f32>,
        max_height: Option<f32>,
    ) -> Result<BetterScrollbar, JsValue> {
        let mut config = ScrollbarConfig::default();
        config.max_width = max_width;
        config.max_height = max_height;
        config.validate().map_err(MountError::from)?;
        Ok(Self::attach(element_id, config)?)
    }

    /// Mount with a JSON [`ScrollbarConfig`].
    pub fn mount_with_config(element_id: &str, config_json: &str) -> Result<BetterScrollbar, JsValue> {
        let config = ScrollbarConfig::from_json(config_json).map_err(MountError::from)?;
        Ok(Self::attach(element_id, config)?)
    }

    /// Recompute and re-render the scrollbars, e.g. after content changed.
    pub fn sync(&self) {
        if let Ok(mut mounted) = self.state.try_borrow_mut() {
            mounted.view.sync();
            mounted.render();
        }
    }

    /// Whether a thumb drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.state
            .try_borrow()
            .is_ok_and(|mounted| mounted.view.is_dragging())
    }

    /// Whether the scrollbars are mounted.
    pub fn is_mounted(&self) -> bool {
        self.state
            .try_borrow()
            .is_ok_and(|mounted| mounted.view.is_mounted())
    }

    /// Current geometry as JSON, `null` before the first sync.
    pub fn geometry_json(&self) -> String {
        self.state
            .try_borrow()
            .ok()
            .and_then(|mounted| mounted.view.geometry().copied())
            .and_then(|geometry| serde_json::to_string(&geometry).ok())
            .unwrap_or_else(|| "null".to_string())
    }

    /// Remove every listener and overlay node. Safe during a drag and safe to
    /// call twice.
    pub fn unmount(&mut self) {
        self.teardown();
    }
}

impl BetterScrollbar {
    /// Mount with a prepared configuration (Rust API).
    pub fn attach(element_id: &str, config: ScrollbarConfig) -> Result<Self, MountError> {
        let window = window().ok_or(MountError::NoWindow)?;
        let document = window.document().ok_or(MountError::NoDocument)?;
        let viewport = document
            .get_element_by_id(element_id)
            .ok_or_else(|| MountError::ElementNotFound(element_id.to_string()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| MountError::NotAnHtmlElement(element_id.to_string()))?;

        let mut view = ScrollView::new(DomHost::new(viewport.clone(), window.clone()), config)
            .with_test_id(element_id);
        let elements = Elements::create(&document, &viewport, &view)?;
        view.mount();

        let state: Shared = Rc::new(RefCell::new(Mounted { view, elements }));
        state.borrow().render();

        let listeners = match Self::subscribe(&state, &viewport, &window) {
            Ok(listeners) => listeners,
            Err(e) => {
                state.borrow().elements.remove();
                return Err(e);
            }
        };

        Ok(Self { state, listeners })
    }

    fn subscribe(
        state: &Shared,
        viewport: &HtmlElement,
        window: &web_sys::Window,
    ) -> Result<Vec<EventListener>, MountError> {
        let mut listeners = vec![
            listen(viewport, "scroll", state, |m, _| {
                m.view.event(&Event::ViewportScrolled);
            })?,
            listen(window, "scroll", state, |m, _| {
                m.view.event(&Event::WindowScrolled);
            })?,
            listen(window, "resize", state, |m, _| {
                let inner = m.view.host().window().inner;
                m.view.event(&Event::Resize {
                    width: inner.width,
                    height: inner.height,
                });
            })?,
        ];

        for event_type in ["mouseenter", "mouseleave"] {
            listeners.push(listen(viewport, event_type, state, move |m, e| {
                if let Some(mouse) = e.dyn_ref::<MouseEvent>() {
                    m.view.event(&mouse_event_to_veneer(mouse, event_type));
                }
            })?);
        }

        let (thumbs, mask) = {
            let mounted = state.borrow();
            (
                mounted.elements.thumbs.clone(),
                mounted.elements.mask.clone(),
            )
        };

        for axis in Axis::ALL {
            listeners.push(listen(&thumbs[axis.index()], "mousedown", state, move |m, e| {
                if let Some(mouse) = e.dyn_ref::<MouseEvent>() {
                    if is_primary(mouse) && m.view.begin_drag(axis, page_point(mouse)) {
                        mouse.prevent_default();
                    }
                }
            })?);
        }

        let drag_targets = [&thumbs[0], &thumbs[1], &mask];
        for target in drag_targets {
            listeners.push(listen(target, "mousemove", state, |m, e| {
                if let Some(mouse) = e.dyn_ref::<MouseEvent>() {
                    if m.view.is_dragging() {
                        m.view.drag_to(page_point(mouse));
                    }
                }
            })?);
            listeners.push(listen(target, "mouseup", state, |m, e| {
                if let Some(mouse) = e.dyn_ref::<MouseEvent>() {
                    m.view.event(&mouse_event_to_veneer(mouse, "mouseup"));
                }
            })?);
        }

        Ok(listeners)
    }

    fn teardown(&mut self) {
        self.listeners.clear();
        let Ok(mut mounted) = self.state.try_borrow_mut() else {
            return;
        };
        if !mounted.view.is_mounted() {
            return;
        }
        mounted.view.unmount();
        mounted.elements.remove();
    }
}

impl Drop for BetterScrollbar {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Initialize panic hook for better error messages.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Log to browser console.
#[wasm_bindgen]
pub fn log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}
