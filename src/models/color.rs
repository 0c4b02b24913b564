//! A single color in hue/saturation/lightness space.

use std::fmt;

use super::RgbColor;

/// Immutable HSL color.
///
/// The hex and `hsl(...)` strings are projections computed from the three
/// components on demand, so they can never drift apart from them.
///
/// No validation happens here: hue is expected in [0, 360), saturation and
/// lightness in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    hue: u16,
    saturation: u8,
    lightness: u8,
}

impl Color {
    /// Creates a color from its HSL components.
    #[must_use]
    pub const fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Hue in degrees.
    #[must_use]
    pub const fn hue(&self) -> u16 {
        self.hue
    }

    /// Saturation percent.
    #[must_use]
    pub const fn saturation(&self) -> u8 {
        self.saturation
    }

    /// Lightness percent.
    #[must_use]
    pub const fn lightness(&self) -> u8 {
        self.lightness
    }

    /// RGB channels of this color.
    #[must_use]
    pub fn to_rgb(&self) -> RgbColor {
        RgbColor::from_hsl(self.hue, self.saturation, self.lightness)
    }

    /// Lowercase `#rrggbb` representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use hue_harmony::models::Color;
    ///
    /// assert_eq!(Color::new(240, 100, 50).hex(), "#0000ff");
    /// ```
    #[must_use]
    pub fn hex(&self) -> String {
        to_hex(self.hue, self.saturation, self.lightness)
    }

    /// CSS display string, e.g. `hsl(210, 40%, 35%)`.
    #[must_use]
    pub fn hsl(&self) -> String {
        hsl_string(self.hue, self.saturation, self.lightness)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hsl())
    }
}

/// Converts HSL components straight to a lowercase `#rrggbb` string.
#[must_use]
pub fn to_hex(hue: u16, saturation: u8, lightness: u8) -> String {
    RgbColor::from_hsl(hue, saturation, lightness).to_hex()
}

/// Formats HSL components as `hsl(H, S%, L%)`.
#[must_use]
pub fn hsl_string(hue: u16, saturation: u8, lightness: u8) -> String {
    format!("hsl({hue}, {saturation}%, {lightness}%)")
}
