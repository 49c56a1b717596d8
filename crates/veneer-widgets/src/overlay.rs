//! Overlay renderer: markup, styles and paint commands for the scrollbars.
//!
//! The DOM rendition is a static scoped stylesheet plus per-frame inline
//! styles. Tracks are `position: fixed` so they stay glued to the visible
//! part of the viewport; thumbs sit inside them. Everything fades in only
//! while the viewport is hovered.

use crate::config::ScrollbarConfig;
use crate::track::{AxisGeometry, ScrollbarGeometry};
use std::fmt;
use veneer_core::{Axis, Canvas, Color, Rect};

/// Class shared by both tracks; drives the hover fade.
pub const SCROLLBAR_CLASS: &str = "scrollbar";
/// Thumb class.
pub const THUMB_CLASS: &str = "scrollbar-thumb";
/// Drag capture mask class.
pub const MASK_CLASS: &str = "scrollbar-mask";
/// Viewport class used when no other scope is given.
pub const VIEWPORT_CLASS: &str = "veneer-viewport";
/// Attribute tagging a mounted viewport; its value scopes the stylesheet.
pub const SCOPE_ATTRIBUTE: &str = "data-veneer";

/// Stylesheet scope for a viewport tagged with `SCOPE_ATTRIBUTE = token`.
///
/// The token is numeric, so the selector is valid whatever the element's id.
#[must_use]
pub fn scope_selector(token: u32) -> String {
    format!("[{SCOPE_ATTRIBUTE}=\"{token}\"]")
}

/// CSS length for an optional pixel value, `unset` when absent.
#[must_use]
pub fn px(value: Option<f32>) -> String {
    value.map_or_else(|| "unset".to_string(), |v| format!("{v}px"))
}

/// Class of the track for an axis.
#[must_use]
pub const fn track_class(axis: Axis) -> &'static str {
    match axis {
        Axis::Horizontal => "scrollbar-horizontal",
        Axis::Vertical => "scrollbar-vertical",
    }
}

/// Selector of the track for an axis, relative to the viewport.
#[must_use]
pub fn track_selector(axis: Axis) -> String {
    format!(".{}", track_class(axis))
}

/// Selector of the thumb for an axis, relative to the viewport.
#[must_use]
pub fn thumb_selector(axis: Axis) -> String {
    format!(".{} > .{THUMB_CLASS}", track_class(axis))
}

/// Selector of the drag mask, relative to the viewport.
#[must_use]
pub fn mask_selector() -> String {
    format!(".{MASK_CLASS}")
}

/// Ordered inline style declarations for one element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementStyle {
    properties: Vec<(&'static str, String)>,
}

impl ElementStyle {
    /// Create an empty style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, replacing an earlier value.
    #[must_use]
    pub fn set(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        if let Some(slot) = self.properties.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.properties.push((name, value));
        }
        self
    }

    /// Value of a property.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.properties.iter().map(|(n, v)| (*n, v.as_str()))
    }
}

impl fmt::Display for ElementStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}: {value};")?;
        }
        Ok(())
    }
}

/// Renders scrollbar geometry.
#[derive(Debug, Clone, Copy)]
pub struct Overlay<'a> {
    config: &'a ScrollbarConfig,
    geometry: Option<&'a ScrollbarGeometry>,
}

impl<'a> Overlay<'a> {
    /// Create a renderer. Without geometry every position renders as `unset`.
    #[must_use]
    pub const fn new(config: &'a ScrollbarConfig, geometry: Option<&'a ScrollbarGeometry>) -> Self {
        Self { config, geometry }
    }

    fn axis(&self, axis: Axis) -> Option<&'a AxisGeometry> {
        self.geometry.map(|g| g.get(axis))
    }

    /// Inline style of the viewport element.
    #[must_use]
    pub fn viewport_style(&self) -> ElementStyle {
        ElementStyle::new()
            .set("max-width", px(self.config.max_extent(Axis::Horizontal)))
            .set("max-height", px(self.config.max_extent(Axis::Vertical)))
    }

    /// Inline style of a track: fixed position and length.
    #[must_use]
    pub fn track_style(&self, axis: Axis) -> ElementStyle {
        let track = self.axis(axis).map(|g| g.track);
        let length = match axis {
            Axis::Horizontal => "width",
            Axis::Vertical => "height",
        };
        ElementStyle::new()
            .set("left", px(track.map(|t| t.position.x)))
            .set("top", px(track.map(|t| t.position.y)))
            .set(length, px(track.map(|t| t.length)))
    }

    /// Inline style of a thumb: offset within the track and length.
    #[must_use]
    pub fn thumb_style(&self, axis: Axis) -> ElementStyle {
        let thumb = self.axis(axis).map(|g| g.thumb);
        let (offset, length) = match axis {
            Axis::Horizontal => ("left", "width"),
            Axis::Vertical => ("top", "height"),
        };
        ElementStyle::new()
            .set(offset, px(thumb.map(|t| t.offset)))
            .set(length, px(thumb.map(|t| t.length)))
    }

    /// Inline style of the drag mask.
    #[must_use]
    pub fn mask_style(&self, visible: bool) -> ElementStyle {
        ElementStyle::new().set("display", if visible { "block" } else { "none" })
    }

    /// Client rectangle covered by a track, including padding and inset.
    #[must_use]
    pub fn track_rect(&self, axis: Axis) -> Option<Rect> {
        let g = self.axis(axis)?;
        let c = self.config;
        let main = axis.of_point(g.track.position);
        let cross = axis.cross().of_point(g.track.position) - c.track_inset;
        Some(Rect::from_origin_size(
            axis.point(main, cross),
            axis.size(g.track.length, c.track_thickness + 2.0 * c.track_padding),
        ))
    }

    /// Client rectangle covered by a thumb.
    #[must_use]
    pub fn thumb_rect(&self, axis: Axis) -> Option<Rect> {
        let g = self.axis(axis)?;
        let c = self.config;
        let main = axis.of_point(g.track.position) + g.thumb.offset;
        let cross = axis.cross().of_point(g.track.position) - c.track_inset + c.track_padding;
        Some(Rect::from_origin_size(
            axis.point(main, cross),
            axis.size(g.thumb.length, c.thumb_thickness),
        ))
    }

    /// Thumb whose rectangle contains `point`.
    #[must_use]
    pub fn thumb_at(&self, point: veneer_core::Point) -> Option<Axis> {
        Axis::ALL.into_iter().find(|&axis| {
            self.thumb_rect(axis)
                .is_some_and(|r| r.contains_point(&point))
        })
    }

    /// Markup for both tracks and the drag mask, appended inside the viewport.
    #[must_use]
    pub fn overlay_html(&self) -> String {
        let mut html = String::new();
        for axis in Axis::ALL {
            html.push_str(&format!(
                r#"<div class="{SCROLLBAR_CLASS} {}" data-axis="{axis}" style="{}"><div class="{THUMB_CLASS}" style="{}"></div></div>"#,
                track_class(axis),
                self.track_style(axis),
                self.thumb_style(axis),
            ));
        }
        html.push_str(&format!(
            r#"<div class="{MASK_CLASS}" style="{}"></div>"#,
            self.mask_style(false)
        ));
        html
    }

    /// Scoped stylesheet. `scope` selects the viewport element.
    #[must_use]
    pub fn stylesheet(&self, scope: &str) -> String {
        let c = self.config;
        let hover_shift = c.track_hover_thickness - c.track_thickness;
        let mut rules = vec![
            format!(
                "{scope} {{ position: relative; overflow: auto; scrollbar-width: none; {} }}",
                self.viewport_style()
            ),
            format!("{scope}::-webkit-scrollbar {{ display: none; }}"),
            format!(
                "{scope} .{SCROLLBAR_CLASS} {{ position: fixed; background: transparent; opacity: 0; transition: opacity {}ms; }}",
                c.fade_ms
            ),
            format!("{scope}:hover .{SCROLLBAR_CLASS} {{ opacity: 1; }}"),
            format!(
                "{scope} .{} {{ height: {}px; padding: {}px 0; margin-top: -{}px; }}",
                track_class(Axis::Horizontal),
                c.track_thickness,
                c.track_padding,
                c.track_inset
            ),
            format!(
                "{scope} .{}:hover {{ background: {}; height: {}px; margin-top: -{}px; }}",
                track_class(Axis::Horizontal),
                c.track_hover_color.to_css(),
                c.track_hover_thickness,
                c.track_inset + hover_shift
            ),
            format!(
                "{scope} .{} {{ width: {}px; padding: 0 {}px; margin-left: -{}px; }}",
                track_class(Axis::Vertical),
                c.track_thickness,
                c.track_padding,
                c.track_inset
            ),
            format!(
                "{scope} .{}:hover {{ background: {}; width: {}px; margin-left: -{}px; }}",
                track_class(Axis::Vertical),
                c.track_hover_color.to_css(),
                c.track_hover_thickness,
                c.track_inset + hover_shift
            ),
            format!(
                "{scope} .{THUMB_CLASS} {{ position: relative; background: {}; border-radius: {}px; }}",
                c.thumb_color.to_css(),
                c.thumb_radius
            ),
            format!(
                "{scope} .{THUMB_CLASS}:hover {{ background: {}; }}",
                c.thumb_hover_color.to_css()
            ),
            format!(
                "{scope} .{} > .{THUMB_CLASS} {{ height: {}px; }}",
                track_class(Axis::Horizontal),
                c.thumb_thickness
            ),
            format!(
                "{scope} .{} > .{THUMB_CLASS} {{ width: {}px; }}",
                track_class(Axis::Vertical),
                c.thumb_thickness
            ),
            format!(
                "{scope} .{MASK_CLASS} {{ position: fixed; left: 0; right: 0; top: 0; bottom: 0; background: {}; }}",
                Color::TRANSPARENT.to_css()
            ),
        ];
        rules.push(String::new());
        rules.join("\n")
    }

    /// Paint both thumbs.
    ///
    /// `visible` mirrors the hover fade: when false everything is painted
    /// fully transparent. The thumb being dragged uses the hover color.
    pub fn paint(&self, canvas: &mut dyn Canvas, visible: bool, active: Option<Axis>) {
        canvas.push_opacity(if visible { 1.0 } else { 0.0 });
        for axis in Axis::ALL {
            if let Some(rect) = self.thumb_rect(axis) {
                let color = if active == Some(axis) {
                    self.config.thumb_hover_color
                } else {
                    self.config.thumb_color
                };
                canvas.fill_rounded_rect(rect, self.config.thumb_radius, color);
            }
        }
        canvas.pop_opacity();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_core::{DrawCommand, Point, RecordingCanvas, Size, ViewportMetrics, WindowMetrics};

    fn geometry() -> ScrollbarGeometry {
        let visible = Size::new(800.0, 300.0);
        let viewport = ViewportMetrics {
            bounds: Rect::from_origin_size(Point::new(20.0, 50.0), visible),
            visible,
            scrollable: Size::new(1600.0, 600.0),
            scroll: Point::new(400.0, 150.0),
        };
        let window = WindowMetrics::new(Size::new(1280.0, 720.0), Point::ORIGIN);
        ScrollbarGeometry::compute(&viewport, &window, &ScrollbarConfig::default())
    }

    // =========================================================================
    // Inline styles
    // =========================================================================

    #[test]
    fn test_px() {
        assert_eq!(px(Some(800.0)), "800px");
        assert_eq!(px(Some(12.5)), "12.5px");
        assert_eq!(px(Some(0.0)), "0px");
        assert_eq!(px(None), "unset");
    }

    #[test]
    fn test_element_style_replaces_and_formats() {
        let style = ElementStyle::new()
            .set("left", "1px")
            .set("top", "2px")
            .set("left", "3px");
        assert_eq!(style.get("left"), Some("3px"));
        assert_eq!(style.to_string(), "left: 3px; top: 2px;");
    }

    #[test]
    fn test_styles_unset_without_geometry() {
        let config = ScrollbarConfig::default();
        let overlay = Overlay::new(&config, None);
        let track = overlay.track_style(Axis::Horizontal);
        assert_eq!(track.get("left"), Some("unset"));
        assert_eq!(track.get("width"), Some("unset"));
        assert_eq!(overlay.viewport_style().get("max-height"), Some("unset"));
        assert!(overlay.thumb_rect(Axis::Vertical).is_none());
    }

    #[test]
    fn test_track_and_thumb_styles() {
        let config = ScrollbarConfig::default();
        let g = geometry();
        let overlay = Overlay::new(&config, Some(&g));

        let h = overlay.track_style(Axis::Horizontal);
        assert_eq!(h.to_string(), "left: 20px; top: 350px; width: 800px;");
        let v = overlay.track_style(Axis::Vertical);
        assert_eq!(v.to_string(), "left: 820px; top: 50px; height: 300px;");

        assert_eq!(
            overlay.thumb_style(Axis::Horizontal).to_string(),
            "left: 200px; width: 400px;"
        );
        assert_eq!(
            overlay.thumb_style(Axis::Vertical).to_string(),
            "top: 75px; height: 150px;"
        );
    }

    #[test]
    fn test_viewport_style_uses_caps() {
        let config = ScrollbarConfig::new().max_width(800.0);
        let overlay = Overlay::new(&config, None);
        assert_eq!(
            overlay.viewport_style().to_string(),
            "max-width: 800px; max-height: unset;"
        );
    }

    // =========================================================================
    // Hit rectangles
    // =========================================================================

    #[test]
    fn test_thumb_rects() {
        let config = ScrollbarConfig::default();
        let g = geometry();
        let overlay = Overlay::new(&config, Some(&g));
        assert_eq!(
            overlay.thumb_rect(Axis::Horizontal),
            Some(Rect::new(220.0, 340.0, 400.0, 7.0))
        );
        assert_eq!(
            overlay.thumb_rect(Axis::Vertical),
            Some(Rect::new(810.0, 125.0, 7.0, 150.0))
        );
        assert_eq!(
            overlay.track_rect(Axis::Horizontal),
            Some(Rect::new(20.0, 338.0, 800.0, 14.0))
        );
    }

    #[test]
    fn test_thumb_at() {
        let config = ScrollbarConfig::default();
        let g = geometry();
        let overlay = Overlay::new(&config, Some(&g));
        assert_eq!(overlay.thumb_at(Point::new(300.0, 343.0)), Some(Axis::Horizontal));
        assert_eq!(overlay.thumb_at(Point::new(812.0, 200.0)), Some(Axis::Vertical));
        assert_eq!(overlay.thumb_at(Point::new(100.0, 343.0)), None);
    }

    // =========================================================================
    // Markup
    // =========================================================================

    #[test]
    fn test_overlay_html_structure() {
        let config = ScrollbarConfig::default();
        let g = geometry();
        let html = Overlay::new(&config, Some(&g)).overlay_html();
        assert!(html.contains(r#"class="scrollbar scrollbar-horizontal" data-axis="horizontal""#));
        assert!(html.contains(r#"class="scrollbar scrollbar-vertical" data-axis="vertical""#));
        assert_eq!(html.matches(THUMB_CLASS).count(), 2);
        assert!(html.ends_with(r#"<div class="scrollbar-mask" style="display: none;"></div>"#));
    }

    #[test]
    fn test_stylesheet_scoped_and_configured() {
        let config = ScrollbarConfig::new().max_height(1000.0);
        let css = Overlay::new(&config, None).stylesheet("#list");
        assert!(css.contains("#list { position: relative; overflow: auto;"));
        assert!(css.contains("max-height: 1000px;"));
        assert!(css.contains("#list::-webkit-scrollbar { display: none; }"));
        assert!(css.contains("transition: opacity 200ms;"));
        assert!(css.contains("#list:hover .scrollbar { opacity: 1; }"));
        assert!(css.contains("background: #777777; border-radius: 10px;"));
        assert!(css.contains("height: 15px; margin-top: -17px;"));
        assert!(css.lines().all(|l| l.is_empty() || l.starts_with("#list")));
    }

    #[test]
    fn test_attribute_scope() {
        assert_eq!(scope_selector(3), "[data-veneer=\"3\"]");
        let css = Overlay::new(&ScrollbarConfig::default(), None).stylesheet(&scope_selector(3));
        assert!(css.contains("[data-veneer=\"3\"]::-webkit-scrollbar { display: none; }"));
        assert!(css.contains("[data-veneer=\"3\"]:hover .scrollbar { opacity: 1; }"));
        assert!(css
            .lines()
            .all(|l| l.is_empty() || l.starts_with("[data-veneer=\"3\"]")));
    }

    #[test]
    fn test_selectors() {
        assert_eq!(track_selector(Axis::Vertical), ".scrollbar-vertical");
        assert_eq!(
            thumb_selector(Axis::Horizontal),
            ".scrollbar-horizontal > .scrollbar-thumb"
        );
        assert_eq!(mask_selector(), ".scrollbar-mask");
    }

    // =========================================================================
    // Paint
    // =========================================================================

    #[test]
    fn test_paint_hidden_is_transparent() {
        let config = ScrollbarConfig::default();
        let g = geometry();
        let mut canvas = RecordingCanvas::new();
        Overlay::new(&config, Some(&g)).paint(&mut canvas, false, None);
        assert_eq!(canvas.command_count(), 2);
        assert!(canvas.commands().iter().all(|c| c.effective_alpha() == 0.0));
    }

    #[test]
    fn test_paint_active_thumb_uses_hover_color() {
        let config = ScrollbarConfig::default();
        let g = geometry();
        let mut canvas = RecordingCanvas::new();
        Overlay::new(&config, Some(&g)).paint(&mut canvas, true, Some(Axis::Horizontal));
        match &canvas.commands()[0] {
            DrawCommand::Rect { bounds, color, .. } => {
                assert_eq!(*bounds, Rect::new(220.0, 340.0, 400.0, 7.0));
                assert_eq!(color.to_hex(), "#555555");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_paint_without_geometry_draws_nothing() {
        let config = ScrollbarConfig::default();
        let mut canvas = RecordingCanvas::new();
        Overlay::new(&config, None).paint(&mut canvas, true, None);
        assert!(canvas.is_empty());
    }
}
