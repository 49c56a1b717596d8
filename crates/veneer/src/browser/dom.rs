//! DOM-backed scroll host.

use js_sys::Reflect;
use veneer_core::{Axis, Point, Rect, Size, ViewportMetrics, WindowMetrics};
use veneer_widgets::overlay::px;
use veneer_widgets::ScrollHost;
use wasm_bindgen::JsValue;
use web_sys::{HtmlElement, Window};

/// A scrollable `HTMLElement` and its window.
#[derive(Debug, Clone)]
pub struct DomHost {
    element: HtmlElement,
    window: Window,
}

impl DomHost {
    /// Wrap an element.
    pub fn new(element: HtmlElement, window: Window) -> Self {
        Self { element, window }
    }

    /// Sub-pixel scroll offset, falling back to the integer property.
    fn scroll_property(&self, name: &str, fallback: i32) -> f32 {
        Reflect::get(self.element.as_ref(), &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or_else(|| f64::from(fallback)) as f32
    }
}

fn number(value: Result<JsValue, JsValue>) -> f32 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
}

impl ScrollHost for DomHost {
    fn metrics(&self) -> Option<ViewportMetrics> {
        if !self.element.is_connected() {
            return None;
        }
        let rect = self.element.get_bounding_client_rect();
        let visible = Size::new(
            self.element.offset_width() as f32,
            self.element.offset_height() as f32,
        );
        Some(ViewportMetrics {
            bounds: Rect::new(
                rect.left() as f32,
                rect.top() as f32,
                visible.width,
                visible.height,
            ),
            visible,
            scrollable: Size::new(
                self.element.scroll_width() as f32,
                self.element.scroll_height() as f32,
            ),
            scroll: Point::new(
                self.scroll_property("scrollLeft", self.element.scroll_left()),
                self.scroll_property("scrollTop", self.element.scroll_top()),
            ),
        })
    }

    fn window(&self) -> WindowMetrics {
        WindowMetrics::new(
            Size::new(
                number(self.window.inner_width()),
                number(self.window.inner_height()),
            ),
            Point::new(
                self.window.scroll_x().unwrap_or(0.0) as f32,
                self.window.scroll_y().unwrap_or(0.0) as f32,
            ),
        )
    }

    fn set_scroll_offset(&self, axis: Axis, offset: f32) {
        if !self.element.is_connected() || offset.is_nan() {
            return;
        }
        // The browser clamps to the scroll range.
        let value = offset.round() as i32;
        match axis {
            Axis::Horizontal => self.element.set_scroll_left(value),
            Axis::Vertical => self.element.set_scroll_top(value),
        }
    }

    fn apply_max_size(&self, max_width: Option<f32>, max_height: Option<f32>) {
        let style = self.element.style();
        for (name, value) in [("max-width", max_width), ("max-height", max_height)] {
            if let Err(e) = style.set_property(name, &px(value)) {
                web_sys::console::warn_1(&JsValue::from_str(&format!(
                    "veneer: failed to set {name}: {e:?}"
                )));
            }
        }
    }
}
