//! RGB color handling with HSL conversion and hex parsing/serialization.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// This is the intermediate form between an HSL [`Color`](super::Color) and
/// its `#rrggbb` projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts HSL components to RGB using the closed-form formula.
    ///
    /// # Arguments
    ///
    /// * `hue` - Hue in degrees, expected in [0, 360)
    /// * `saturation` - Saturation percent (0-100)
    /// * `lightness` - Lightness percent (0-100)
    ///
    /// Inputs are not validated or wrapped; callers normalize the hue.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_harmony::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::from_hsl(0, 100, 50), RgbColor::new(255, 0, 0));
    /// assert_eq!(RgbColor::from_hsl(0, 0, 50), RgbColor::new(128, 128, 128));
    /// ```
    #[must_use]
    pub fn from_hsl(hue: u16, saturation: u8, lightness: u8) -> Self {
        let h = f64::from(hue);
        let l = f64::from(lightness) / 100.0;
        let a = f64::from(saturation) * l.min(1.0 - l) / 100.0;

        // Channel offsets on the 12-step wheel: red 0, green 8, blue 4
        let channel = |n: f64| -> u8 {
            let k = (n + h / 30.0) % 12.0;
            let value = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
            (255.0 * value).round().clamp(0.0, 255.0) as u8
        };

        Self {
            r: channel(0.0),
            g: channel(8.0),
            b: channel(4.0),
        }
    }

    /// Parses an `RgbColor` from a hex string.
    ///
    /// Supports formats: "#RRGGBB", "RRGGBB", "#rrggbb", "rrggbb"
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_harmony::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("00ff00").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 || !hex.is_ascii() {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (RRGGBB)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Converts the color to a hex string in the format "#rrggbb" (lowercase).
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_harmony::models::RgbColor;
    ///
    /// let color = RgbColor::new(255, 0, 0);
    /// assert_eq!(color.to_hex(), "#ff0000");
    ///
    /// let color = RgbColor::new(0, 128, 255);
    /// assert_eq!(color.to_hex(), "#0080ff");
    /// ```
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Converts the color to a crossterm color for terminal swatches.
    #[must_use]
    pub const fn to_terminal_color(self) -> crossterm::style::Color {
        crossterm::style::Color::Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
