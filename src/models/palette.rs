//! Palette: the five colors produced by one generation call.

use super::{Color, HarmonyRule};

/// Number of colors in every palette.
pub const PALETTE_SIZE: usize = 5;

/// An ordered set of exactly five colors.
///
/// Index 0 is the randomly sampled base color; indices 1-4 are derived from
/// it by the palette's harmony rule. Order is both render and export order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    rule: HarmonyRule,
    colors: [Color; PALETTE_SIZE],
}

impl Palette {
    /// Creates a palette from its rule and colors.
    #[must_use]
    pub const fn new(rule: HarmonyRule, colors: [Color; PALETTE_SIZE]) -> Self {
        Self { rule, colors }
    }

    /// Rule that produced this palette.
    #[must_use]
    pub const fn rule(&self) -> HarmonyRule {
        self.rule
    }

    /// The base color (index 0).
    #[must_use]
    pub const fn base(&self) -> Color {
        self.colors[0]
    }

    /// All colors in order.
    #[must_use]
    pub const fn colors(&self) -> &[Color; PALETTE_SIZE] {
        &self.colors
    }

    /// Color at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Color> {
        self.colors.get(index)
    }

    /// Always [`PALETTE_SIZE`].
    #[must_use]
    pub const fn len(&self) -> usize {
        PALETTE_SIZE
    }

    /// Palettes are never empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over the colors in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }

    /// Hex codes in order.
    #[must_use]
    pub fn hex_codes(&self) -> Vec<String> {
        self.colors.iter().map(Color::hex).collect()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
