//! Scroll view widget: a viewport with overlay scrollbars.

use crate::config::ScrollbarConfig;
use crate::drag::DragController;
use crate::host::ScrollHost;
use crate::overlay::{Overlay, VIEWPORT_CLASS};
use crate::sync::ScrollSync;
use crate::track::ScrollbarGeometry;
use std::any::Any;
use tracing::debug;
use veneer_core::{
    Axis, Brick, Canvas, Constraints, Event, LayoutResult, MouseButton, Point, Rect, Size, Widget,
};

/// Message emitted when a thumb drag scrolled the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbDragged {
    /// Axis that scrolled
    pub axis: Axis,
    /// Offset requested from the host (before clamping)
    pub offset: f32,
}

/// Message emitted after the scrollbars were recomputed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarsSynced {
    /// New geometry
    pub geometry: ScrollbarGeometry,
}

/// Viewport with custom overlay scrollbars.
///
/// Owns the host handle plus the synchronizer and drag controller. Layout
/// events (`ViewportScrolled`, `WindowScrolled`, `Resize`) resync the
/// geometry; a left press on a thumb starts a drag that ends on the next
/// release of any button anywhere.
#[derive(Debug)]
pub struct ScrollView<H: ScrollHost> {
    host: H,
    config: ScrollbarConfig,
    sync: ScrollSync,
    drag: DragController,
    hovered: bool,
    mounted: bool,
    bounds: Rect,
    test_id_value: Option<String>,
}

impl<H: ScrollHost> ScrollView<H> {
    /// Create an unmounted scroll view. Zero size caps are dropped.
    #[must_use]
    pub fn new(host: H, config: ScrollbarConfig) -> Self {
        let config = config.normalized();
        let drag = DragController::new(config.drag_axes);
        Self {
            host,
            config,
            sync: ScrollSync::new(),
            drag,
            hovered: false,
            mounted: false,
            bounds: Rect::default(),
            test_id_value: None,
        }
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Apply the size caps and compute the initial geometry.
    pub fn mount(&mut self) {
        self.host
            .apply_max_size(self.config.max_width, self.config.max_height);
        self.mounted = true;
        debug!(
            max_width = ?self.config.max_width,
            max_height = ?self.config.max_height,
            "scroll view mounted"
        );
        self.sync();
    }

    /// Cancel any drag and drop the geometry.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.drag.end();
        self.sync.reset();
        self.hovered = false;
        self.mounted = false;
        debug!("scroll view unmounted");
    }

    /// Whether the view is mounted.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Recompute scrollbar geometry from the host.
    pub fn sync(&mut self) -> Option<ScrollbarGeometry> {
        if !self.mounted {
            return None;
        }
        self.sync.sync(&self.host, &self.config).copied()
    }

    /// Start dragging the thumb of `axis` at `pointer`.
    ///
    /// The drag-start scroll offset is read from the host, `0` when the host
    /// is unavailable.
    pub fn begin_drag(&mut self, axis: Axis, pointer: Point) -> bool {
        if !self.mounted {
            return false;
        }
        let scroll = self.host.scroll_offset(axis).unwrap_or(0.0);
        self.drag.begin(axis, pointer, scroll)
    }

    /// Move the pointer of the active drag.
    pub fn drag_to(&mut self, pointer: Point) -> Option<ThumbDragged> {
        if !self.mounted {
            return None;
        }
        self.drag
            .update(pointer, &self.host)
            .map(|(axis, offset)| ThumbDragged { axis, offset })
    }

    /// Release the active drag.
    pub fn end_drag(&mut self) -> bool {
        self.drag.end()
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Axis being dragged.
    #[must_use]
    pub fn dragging_axis(&self) -> Option<Axis> {
        self.drag.active_axis()
    }

    /// Whether the full-window capture mask should be shown.
    #[must_use]
    pub fn mask_visible(&self) -> bool {
        self.is_dragging()
    }

    /// Whether the pointer is over the viewport.
    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Geometry from the last sync.
    #[must_use]
    pub const fn geometry(&self) -> Option<&ScrollbarGeometry> {
        self.sync.geometry()
    }

    /// Number of completed syncs.
    #[must_use]
    pub const fn sync_passes(&self) -> u64 {
        self.sync.passes()
    }

    /// Renderer for the current geometry.
    #[must_use]
    pub fn overlay(&self) -> Overlay<'_> {
        Overlay::new(&self.config, self.sync.geometry())
    }

    /// Configuration.
    #[must_use]
    pub const fn config(&self) -> &ScrollbarConfig {
        &self.config
    }

    /// Host handle.
    #[must_use]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Client rectangle of the viewport as last reported by the host.
    #[must_use]
    pub fn viewport_rect(&self) -> Option<Rect> {
        self.host.metrics().map(|m| m.bounds)
    }
}

impl<H: ScrollHost> Widget for ScrollView<H> {
    fn measure(&self, constraints: Constraints) -> Size {
        let content = self
            .host
            .metrics()
            .map_or(Size::ZERO, |m| m.scrollable);
        constraints
            .cap_width(self.config.max_width)
            .cap_height(self.config.max_height)
            .constrain(content)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if !self.mounted {
            return;
        }
        self.overlay().paint(
            canvas,
            self.hovered || self.is_dragging(),
            self.dragging_axis(),
        );
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if !self.mounted {
            debug!(?event, "event ignored, scroll view not mounted");
            return None;
        }

        match event {
            e if e.is_layout_change() => {
                if let Some(geometry) = self.sync() {
                    return Some(Box::new(ScrollbarsSynced { geometry }));
                }
            }
            Event::MouseEnter => {
                self.hovered = true;
            }
            Event::MouseLeave => {
                self.hovered = false;
            }
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                if let Some(axis) = self.overlay().thumb_at(*position) {
                    self.begin_drag(axis, *position);
                }
            }
            Event::MouseMove { position } => {
                if self.is_dragging() {
                    if let Some(dragged) = self.drag_to(*position) {
                        return Some(Box::new(dragged));
                    }
                }
            }
            Event::MouseUp { .. } => {
                self.end_drag();
            }
            _ => {}
        }

        None
    }

    fn is_interactive(&self) -> bool {
        self.mounted
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

impl<H: ScrollHost> Brick for ScrollView<H> {
    fn brick_name(&self) -> &'static str {
        "ScrollView"
    }

    fn to_html(&self) -> String {
        let test_id = self.test_id_value.as_deref().unwrap_or("scroll-view");
        format!(
            r#"<div class="{VIEWPORT_CLASS}" data-testid="{}">{}</div>"#,
            test_id,
            self.overlay().overlay_html()
        )
    }

    fn to_css(&self) -> String {
        self.overlay().stylesheet(&format!(".{VIEWPORT_CLASS}"))
    }
}
