//! Color representation and CSS conversion.

use serde::{Deserialize, Serialize};

/// RGBA color with values in the range [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component [0.0, 1.0]
    pub r: f32,
    /// Green component [0.0, 1.0]
    pub g: f32,
    /// Blue component [0.0, 1.0]
    pub b: f32,
    /// Alpha component [0.0, 1.0]
    pub a: f32,
}

impl Color {
    /// Create a new color, clamping values to [0.0, 1.0].
    #[must_use]
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Create an opaque color from RGB values.
    #[must_use]
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Parse a hex color string (e.g., "#777777" or "777777").
    ///
    /// Supports 6-character RGB and 8-character RGBA formats.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color.
    pub fn from_hex(hex: &str) -> Result<Self, ColorParseError> {
        let hex = hex.trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(ColorParseError::InvalidHex);
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map(|v| f32::from(v) / 255.0)
                .map_err(|_| ColorParseError::InvalidHex)
        };

        match hex.len() {
            6 => Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::new(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(ColorParseError::InvalidLength),
        }
    }

    /// Convert to hex string (RGB only).
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            Self::byte(self.r),
            Self::byte(self.g),
            Self::byte(self.b)
        )
    }

    /// Convert to hex string with alpha.
    #[must_use]
    pub fn to_hex_with_alpha(&self) -> String {
        format!("{}{:02x}", self.to_hex(), Self::byte(self.a))
    }

    /// Convert to a CSS color value.
    ///
    /// Opaque colors use `#rrggbb`; anything translucent uses `rgba()`.
    #[must_use]
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            self.to_hex()
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                Self::byte(self.r),
                Self::byte(self.g),
                Self::byte(self.b),
                self.a
            )
        }
    }

    fn byte(component: f32) -> u8 {
        (component * 255.0).round() as u8
    }

    /// Black color
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    /// White color
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    /// Transparent color
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Error type for color parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Invalid hex characters
    InvalidHex,
    /// Invalid string length
    InvalidLength,
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHex => write!(f, "invalid hex characters"),
            Self::InvalidLength => write!(f, "invalid hex string length (expected 6 or 8)"),
        }
    }
}

impl std::error::Error for ColorParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_constants() {
        assert_eq!(Color::BLACK.r, 0.0);
        assert_eq!(Color::WHITE.r, 1.0);
        assert_eq!(Color::TRANSPARENT.a, 0.0);
    }

    #[test]
    fn test_color_from_hex_thumb_grey() {
        let c = Color::from_hex("#777777").unwrap();
        assert_eq!(c.to_hex(), "#777777");
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_color_from_hex_with_alpha() {
        let c = Color::from_hex("00000000").unwrap();
        assert_eq!(c, Color::TRANSPARENT);
        assert_eq!(c.to_hex_with_alpha(), "#00000000");
    }

    #[test]
    fn test_color_from_hex_invalid() {
        assert_eq!(Color::from_hex("#gg0000"), Err(ColorParseError::InvalidHex));
        assert_eq!(Color::from_hex("#fff"), Err(ColorParseError::InvalidLength));
        assert_eq!(Color::from_hex("#ééé"), Err(ColorParseError::InvalidHex));
    }

    #[test]
    fn test_color_to_css() {
        assert_eq!(Color::WHITE.to_css(), "#ffffff");
        assert_eq!(Color::TRANSPARENT.to_css(), "rgba(0, 0, 0, 0)");
        assert_eq!(Color::new(1.0, 0.0, 0.0, 0.5).to_css(), "rgba(255, 0, 0, 0.5)");
    }

    #[test]
    fn test_color_parse_error_display() {
        assert_eq!(
            ColorParseError::InvalidHex.to_string(),
            "invalid hex characters"
        );
        assert_eq!(
            ColorParseError::InvalidLength.to_string(),
            "invalid hex string length (expected 6 or 8)"
        );
    }
}
