//! Harmony rules: the named hue relationships a palette can follow.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color-harmony rule selecting how a palette is derived from its base color.
///
/// Parsing is total: any unrecognized selector resolves to [`HarmonyRule::Mixed`].
/// Serialized as its kebab-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HarmonyRule {
    /// Single hue, stepped saturation and lightness.
    Monochromatic,
    /// Neighboring hues 20 degrees apart.
    Analogous,
    /// Base hue and its opposite.
    Complementary,
    /// Base hue plus the two hues flanking its complement (+150, +210).
    SplitComplementary,
    /// Three hues 120 degrees apart.
    Triadic,
    /// Four hues 90 degrees apart.
    Tetradic,
    /// Complement, two analogous neighbors and a triadic partner.
    #[default]
    Mixed,
}

impl HarmonyRule {
    /// Canonical selector name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monochromatic => "monochromatic",
            Self::Analogous => "analogous",
            Self::Complementary => "complementary",
            Self::SplitComplementary => "split-complementary",
            Self::Triadic => "triadic",
            Self::Tetradic => "tetradic",
            Self::Mixed => "mixed",
        }
    }

    /// One-line description for listings.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Monochromatic => "Same hue with varied saturation and lightness",
            Self::Analogous => "Adjacent hues on the color wheel",
            Self::Complementary => "Base hue and its opposite, with variations",
            Self::SplitComplementary => "Base hue plus the two neighbors of its complement",
            Self::Triadic => "Three hues evenly spaced 120 degrees apart",
            Self::Tetradic => "Two complementary pairs 90 degrees apart",
            Self::Mixed => "Complement, analogous neighbors and a triadic partner",
        }
    }

    /// Looks up a rule by its exact canonical name. Matching is case-sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().find(|rule| rule.name() == name).copied()
    }

    /// Resolves a selector, falling back to [`HarmonyRule::Mixed`] for anything unknown.
    #[must_use]
    pub fn from_selector(selector: &str) -> Self {
        Self::from_name(selector).unwrap_or(Self::Mixed)
    }

    /// All rules in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Monochromatic,
            Self::Analogous,
            Self::Complementary,
            Self::SplitComplementary,
            Self::Triadic,
            Self::Tetradic,
            Self::Mixed,
        ]
    }
}

impl fmt::Display for HarmonyRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HarmonyRule {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_selector(s))
    }
}

impl From<String> for HarmonyRule {
    fn from(selector: String) -> Self {
        Self::from_selector(&selector)
    }
}

impl From<HarmonyRule> for String {
    fn from(rule: HarmonyRule) -> Self {
        rule.name().to_string()
    }
}
