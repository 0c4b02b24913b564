//! Hue Harmony Library
//!
//! This library generates five-color palettes from color-harmony rules
//! (monochromatic, analogous, complementary, split-complementary, triadic,
//! tetradic and mixed), converts HSL colors to hex, and exports palettes as
//! JSON documents that can be read back.

// Module declarations
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod constants;
pub mod export;
pub mod generator;
pub mod logging;
pub mod models;
pub mod random;

pub use export::PaletteExport;
pub use generator::PaletteGenerator;
pub use models::{Color, HarmonyRule, Palette};
pub use random::{RandomSource, RngSource, SequenceSource};
