//! Scrollbar configuration.
//!
//! Configuration is plain serde data so it can be embedded in a page as JSON
//! or kept next to an application as YAML:
//!
//! ```yaml
//! max_width: 800
//! max_height: 1000
//! thumb_color: "#777777"
//! drag_axes: horizontal
//! ```

use crate::drag::DragAxes;
use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use veneer_core::Color;

/// Sizing, colors and behavior of the overlay scrollbars.
///
/// `max_width` / `max_height` cap the viewport (CSS `max-width` /
/// `max-height`) and set the track length for that axis. `None` applies no
/// cap, and a cap of `0` counts as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig", into = "RawConfig")]
pub struct ScrollbarConfig {
    /// Maximum viewport width in pixels
    pub max_width: Option<f32>,
    /// Maximum viewport height in pixels
    pub max_height: Option<f32>,
    /// Track cross-axis thickness
    pub track_thickness: f32,
    /// Thumb cross-axis thickness
    pub thumb_thickness: f32,
    /// How far the track is pulled back inside the viewport's far edge
    pub track_inset: f32,
    /// Padding between the track edge and the thumb
    pub track_padding: f32,
    /// Track thickness while hovered
    pub track_hover_thickness: f32,
    /// Thumb corner radius
    pub thumb_radius: f32,
    /// Fade duration of the auto-hide transition in milliseconds
    pub fade_ms: u32,
    /// Thumb fill
    pub thumb_color: Color,
    /// Thumb fill while hovered
    pub thumb_hover_color: Color,
    /// Track background while hovered
    pub track_hover_color: Color,
    /// Which thumbs scroll their axis when dragged
    pub drag_axes: DragAxes,
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self {
            max_width: None,
            max_height: None,
            track_thickness: 10.0,
            thumb_thickness: 7.0,
            track_inset: 12.0,
            track_padding: 2.0,
            track_hover_thickness: 15.0,
            thumb_radius: 10.0,
            fade_ms: 200,
            thumb_color: gray(0x77),
            thumb_hover_color: gray(0x55),
            track_hover_color: Color::WHITE,
            drag_axes: DragAxes::default(),
        }
    }
}

impl ScrollbarConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the viewport width. `0` leaves it uncapped.
    #[must_use]
    pub fn max_width(mut self, width: f32) -> Self {
        self.max_width = size_cap(Some(width));
        self
    }

    /// Cap the viewport height. `0` leaves it uncapped.
    #[must_use]
    pub fn max_height(mut self, height: f32) -> Self {
        self.max_height = size_cap(Some(height));
        self
    }

    /// Drop zero caps so they read as "no cap".
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.max_width = size_cap(self.max_width);
        self.max_height = size_cap(self.max_height);
        self
    }

    /// Choose which thumbs are draggable.
    #[must_use]
    pub const fn drag_axes(mut self, axes: DragAxes) -> Self {
        self.drag_axes = axes;
        self
    }

    /// Configured cap for an axis, `None` for a zero cap.
    #[must_use]
    pub fn max_extent(&self, axis: veneer_core::Axis) -> Option<f32> {
        size_cap(match axis {
            veneer_core::Axis::Horizontal => self.max_width,
            veneer_core::Axis::Vertical => self.max_height,
        })
    }

    /// Parse a YAML document.
    pub fn from_yaml(yaml: &str) -> ConfigResult<Self> {
        let raw: RawConfig = serde_yaml_ng::from_str(yaml)?;
        Self::try_from(raw)
    }

    /// Parse a JSON document.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let raw: RawConfig = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    /// Check every pixel dimension.
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(width) = self.max_width {
            check_dimension("max_width", width)?;
        }
        if let Some(height) = self.max_height {
            check_dimension("max_height", height)?;
        }
        check_dimension("track_thickness", self.track_thickness)?;
        check_dimension("thumb_thickness", self.thumb_thickness)?;
        check_dimension("track_inset", self.track_inset)?;
        check_dimension("track_padding", self.track_padding)?;
        check_dimension("track_hover_thickness", self.track_hover_thickness)?;
        check_dimension("thumb_radius", self.thumb_radius)?;
        Ok(())
    }
}

/// A zero cap means no cap. Negative and NaN values pass through so
/// `validate` can reject them.
fn size_cap(value: Option<f32>) -> Option<f32> {
    value.filter(|v| *v != 0.0)
}

fn gray(level: u8) -> Color {
    let v = f32::from(level) / 255.0;
    Color::rgb(v, v, v)
}

fn check_dimension(field: &'static str, value: f32) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDimension { field, value })
    }
}

fn parse_color(field: &'static str, hex: &str) -> ConfigResult<Color> {
    Color::from_hex(hex).map_err(|source| ConfigError::InvalidColor { field, source })
}

/// On-disk shape of [`ScrollbarConfig`]: colors as hex strings, every field
/// optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    max_width: Option<f32>,
    max_height: Option<f32>,
    track_thickness: f32,
    thumb_thickness: f32,
    track_inset: f32,
    track_padding: f32,
    track_hover_thickness: f32,
    thumb_radius: f32,
    fade_ms: u32,
    thumb_color: String,
    thumb_hover_color: String,
    track_hover_color: String,
    drag_axes: DragAxes,
}

impl Default for RawConfig {
    fn default() -> Self {
        ScrollbarConfig::default().into()
    }
}

impl From<ScrollbarConfig> for RawConfig {
    fn from(config: ScrollbarConfig) -> Self {
        Self {
            max_width: config.max_width,
            max_height: config.max_height,
            track_thickness: config.track_thickness,
            thumb_thickness: config.thumb_thickness,
            track_inset: config.track_inset,
            track_padding: config.track_padding,
            track_hover_thickness: config.track_hover_thickness,
            thumb_radius: config.thumb_radius,
            fade_ms: config.fade_ms,
            thumb_color: config.thumb_color.to_hex_with_alpha(),
            thumb_hover_color: config.thumb_hover_color.to_hex_with_alpha(),
            track_hover_color: config.track_hover_color.to_hex_with_alpha(),
            drag_axes: config.drag_axes,
        }
    }
}

impl TryFrom<RawConfig> for ScrollbarConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> ConfigResult<Self> {
        let config = Self {
            max_width: size_cap(raw.max_width),
            max_height: size_cap(raw.max_height),
            track_thickness: raw.track_thickness,
            thumb_thickness: raw.thumb_thickness,
            track_inset: raw.track_inset,
            track_padding: raw.track_padding,
            track_hover_thickness: raw.track_hover_thickness,
            thumb_radius: raw.thumb_radius,
            fade_ms: raw.fade_ms,
            thumb_color: parse_color("thumb_color", &raw.thumb_color)?,
            thumb_hover_color: parse_color("thumb_hover_color", &raw.thumb_hover_color)?,
            track_hover_color: parse_color("track_hover_color", &raw.track_hover_color)?,
            drag_axes: raw.drag_axes,
        };
        config.validate()?;
        Ok(config)
    }
}
