//! Data models for colors, harmony rules and palettes.
//!
//! Models are independent of the CLI, the clipboard and export formats.

pub mod color;
pub mod harmony;
pub mod palette;
pub mod rgb;

// Re-export all model types
pub use color::Color;
pub use harmony::HarmonyRule;
pub use palette::{Palette, PALETTE_SIZE};
pub use rgb::RgbColor;
