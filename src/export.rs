//! JSON export of palettes.
//!
//! The export document is the only artifact that leaves the program:
//!
//! ```json
//! {
//!   "harmonyType": "triadic",
//!   "colors": [{ "hex": "#20dfdf", "hsl": "hsl(180, 75%, 50%)", "hue": 180, "saturation": 75, "lightness": 50 }],
//!   "timestamp": "2026-10-19T12:00:00.000Z",
//!   "name": "triadic_palette_1792411200000"
//! }
//! ```
//!
//! Documents round-trip: parsing an exported file yields the same colors in
//! the same order, and the stored `hex`/`hsl` strings are checked against the
//! HSL components on the way back in.

use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::info;

use crate::models::color::{hsl_string, to_hex};
use crate::models::{Color, HarmonyRule, Palette, RgbColor, PALETTE_SIZE};

/// One color record of an export document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportedColor {
    /// Lowercase `#rrggbb`
    pub hex: String,
    /// `hsl(H, S%, L%)`
    pub hsl: String,
    /// Hue in degrees
    pub hue: u16,
    /// Saturation percent
    pub saturation: u8,
    /// Lightness percent
    pub lightness: u8,
}

impl From<&Color> for ExportedColor {
    fn from(color: &Color) -> Self {
        Self {
            hex: color.hex(),
            hsl: color.hsl(),
            hue: color.hue(),
            saturation: color.saturation(),
            lightness: color.lightness(),
        }
    }
}

impl ExportedColor {
    /// Converts back to a [`Color`], checking ranges and projections.
    fn to_color(&self, index: usize) -> Result<Color> {
        if self.hue >= 360 {
            anyhow::bail!("Color {index}: hue {} is outside [0, 360)", self.hue);
        }
        if self.saturation > 100 || self.lightness > 100 {
            anyhow::bail!(
                "Color {index}: saturation {} / lightness {} must be at most 100",
                self.saturation,
                self.lightness
            );
        }
        if !hex_pattern().is_match(&self.hex) {
            anyhow::bail!(
                "Color {index}: invalid hex '{}'. Expected #RRGGBB",
                self.hex
            );
        }

        let stored = RgbColor::from_hex(&self.hex)
            .with_context(|| format!("Color {index}: unreadable hex '{}'", self.hex))?;
        let expected = to_hex(self.hue, self.saturation, self.lightness);
        if stored.to_hex() != expected {
            anyhow::bail!(
                "Color {index}: hex {} does not match hsl components (expected {expected})",
                self.hex
            );
        }

        let expected = hsl_string(self.hue, self.saturation, self.lightness);
        if self.hsl != expected {
            anyhow::bail!(
                "Color {index}: '{}' does not match hsl components (expected '{expected}')",
                self.hsl
            );
        }

        Ok(Color::new(self.hue, self.saturation, self.lightness))
    }
}

fn hex_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex pattern is valid"))
}

/// Export document for one palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteExport {
    /// Harmony rule name
    pub harmony_type: String,
    /// Colors in palette order
    pub colors: Vec<ExportedColor>,
    /// ISO-8601 UTC creation time with millisecond precision
    pub timestamp: String,
    /// `{harmonyType}_palette_{unix millis}`, also the file stem
    pub name: String,
}

impl PaletteExport {
    /// Builds the document for `palette`, stamped with the current time.
    #[must_use]
    pub fn new(palette: &Palette) -> Self {
        Self::at(palette, Utc::now())
    }

    /// Builds the document for `palette`, stamped with `created`.
    #[must_use]
    pub fn at(palette: &Palette, created: DateTime<Utc>) -> Self {
        let harmony_type = palette.rule().name().to_string();
        Self {
            name: format!("{harmony_type}_palette_{}", created.timestamp_millis()),
            colors: palette.iter().map(ExportedColor::from).collect(),
            timestamp: created.to_rfc3339_opts(SecondsFormat::Millis, true),
            harmony_type,
        }
    }

    /// Default file name, `{name}.json`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.json", self.name)
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize palette export")
    }

    /// Parses a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse palette export JSON")
    }

    /// Reads and parses a document from disk.
    pub fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read palette file: {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("Invalid palette file: {}", path.display()))
    }

    /// Writes the document.
    ///
    /// If `target` is an existing directory the file is created inside it
    /// under [`file_name`](Self::file_name). Returns the path written.
    pub fn write(&self, target: &Path) -> Result<PathBuf> {
        let path = if target.is_dir() {
            target.join(self.file_name())
        } else {
            target.to_path_buf()
        };

        fs::write(&path, self.to_json()?)
            .with_context(|| format!("Failed to write palette file: {}", path.display()))?;
        info!(path = %path.display(), "Exported palette");

        Ok(path)
    }

    /// Converts the document back into a palette.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not hold exactly five colors or
    /// a color's stored `hex`/`hsl` disagree with its components.
    pub fn to_palette(&self) -> Result<Palette> {
        if self.colors.len() != PALETTE_SIZE {
            anyhow::bail!(
                "Palette must contain exactly {PALETTE_SIZE} colors, found {}",
                self.colors.len()
            );
        }

        let mut colors = [Color::new(0, 0, 0); PALETTE_SIZE];
        for (index, (slot, exported)) in colors.iter_mut().zip(&self.colors).enumerate() {
            *slot = exported.to_color(index)?;
        }

        Ok(Palette::new(
            HarmonyRule::from_selector(&self.harmony_type),
            colors,
        ))
    }
}
