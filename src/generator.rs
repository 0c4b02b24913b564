//! Palette generation by harmony rule.
//!
//! Every palette starts from a randomly sampled base color. The four derived
//! colors come from a per-rule table of steps: each step names a hue offset
//! (or a random pick among offsets) and how saturation and lightness move
//! away from the base. Perturbation ranges and clamp bounds are literal per
//! rule and must stay that way.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use rand::rngs::{StdRng, ThreadRng};
use tracing::{debug, warn};

use crate::models::{Color, HarmonyRule, Palette};
use crate::random::{RandomSource, RngSource};

/// Inclusive clamp range for a saturation or lightness percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Bounds {
    min: u8,
    max: u8,
}

impl Bounds {
    const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    /// Rounds to the nearest integer, then clamps into the range.
    fn apply(self, value: f64) -> u8 {
        value
            .round()
            .clamp(f64::from(self.min), f64::from(self.max)) as u8
    }
}

/// Where a derived color's hue sits relative to the base hue.
#[derive(Debug, Clone, Copy)]
enum HueStep {
    /// Fixed offset in degrees.
    Offset(i32),
    /// `above_half` when a draw exceeds 0.5, otherwise `otherwise`.
    Coin { above_half: i32, otherwise: i32 },
    /// Uniform pick among offsets.
    OneOf(&'static [i32]),
}

/// How a derived color's saturation and lightness are produced.
#[derive(Debug, Clone, Copy)]
enum ToneStep {
    /// Deterministic shift from the base.
    Shift {
        saturation: i32,
        lightness: i32,
        saturation_bounds: Bounds,
        lightness_bounds: Bounds,
    },
    /// Base value plus uniform noise in `[-spread, spread)`.
    Jitter {
        spread: f64,
        saturation_bounds: Bounds,
        lightness_bounds: Bounds,
    },
    /// Fresh sample `floor(r * width) + min`, ignoring the base.
    Resample { saturation: Span, lightness: Span },
}

/// Integer sampling range `[min, min + width)`.
#[derive(Debug, Clone, Copy)]
struct Span {
    min: u16,
    width: u16,
}

impl Span {
    const fn new(min: u16, width: u16) -> Self {
        Self { min, width }
    }

    fn sample(self, source: &mut impl RandomSource) -> u16 {
        self.min + below(source, self.width)
    }
}

#[derive(Debug, Clone, Copy)]
struct Step {
    hue: HueStep,
    tone: ToneStep,
}

const fn shift(saturation: i32, lightness: i32) -> Step {
    Step {
        hue: HueStep::Offset(0),
        tone: ToneStep::Shift {
            saturation,
            lightness,
            saturation_bounds: Bounds::new(20, 90),
            lightness_bounds: Bounds::new(20, 80),
        },
    }
}

const fn jitter(hue: HueStep, spread: f64, saturation: Bounds, lightness: Bounds) -> Step {
    Step {
        hue,
        tone: ToneStep::Jitter {
            spread,
            saturation_bounds: saturation,
            lightness_bounds: lightness,
        },
    }
}

const fn resample(offset: i32) -> Step {
    Step {
        hue: HueStep::Offset(offset),
        tone: ToneStep::Resample {
            saturation: Span::new(50, 30),
            lightness: Span::new(30, 40),
        },
    }
}

const BASE_HUE: Span = Span::new(0, 360);
const BASE_SATURATION: Span = Span::new(50, 50);
const BASE_LIGHTNESS: Span = Span::new(30, 40);

static MONOCHROMATIC: [Step; 4] = [shift(-15, -12), shift(0, 0), shift(15, 12), shift(30, 24)];

static ANALOGOUS: [Step; 4] = {
    const SAT: Bounds = Bounds::new(40, 90);
    const LIGHT: Bounds = Bounds::new(25, 75);
    [
        jitter(HueStep::Offset(-20), 10.0, SAT, LIGHT),
        jitter(HueStep::Offset(0), 10.0, SAT, LIGHT),
        jitter(HueStep::Offset(20), 10.0, SAT, LIGHT),
        jitter(HueStep::Offset(40), 10.0, SAT, LIGHT),
    ]
};

static COMPLEMENTARY: [Step; 4] = {
    const SAT: Bounds = Bounds::new(30, 90);
    const LIGHT: Bounds = Bounds::new(25, 75);
    [
        Step {
            hue: HueStep::Offset(180),
            tone: ToneStep::Shift {
                saturation: 0,
                lightness: 0,
                saturation_bounds: SAT,
                lightness_bounds: LIGHT,
            },
        },
        jitter(HueStep::Offset(0), 15.0, SAT, LIGHT),
        jitter(HueStep::Offset(0), 15.0, SAT, LIGHT),
        jitter(HueStep::Offset(180), 15.0, SAT, LIGHT),
    ]
};

static SPLIT_COMPLEMENTARY: [Step; 4] = {
    const NEAR_SAT: Bounds = Bounds::new(40, 85);
    const NEAR_LIGHT: Bounds = Bounds::new(30, 70);
    const WIDE_SAT: Bounds = Bounds::new(35, 80);
    const WIDE_LIGHT: Bounds = Bounds::new(25, 75);
    [
        jitter(HueStep::Offset(150), 12.5, NEAR_SAT, NEAR_LIGHT),
        jitter(HueStep::Offset(210), 12.5, NEAR_SAT, NEAR_LIGHT),
        jitter(HueStep::Offset(0), 15.0, WIDE_SAT, WIDE_LIGHT),
        jitter(
            HueStep::Coin {
                above_half: 150,
                otherwise: 210,
            },
            15.0,
            WIDE_SAT,
            WIDE_LIGHT,
        ),
    ]
};

static TRIADIC: [Step; 4] = {
    const NEAR_SAT: Bounds = Bounds::new(45, 85);
    const NEAR_LIGHT: Bounds = Bounds::new(30, 70);
    const WIDE_SAT: Bounds = Bounds::new(40, 80);
    const WIDE_LIGHT: Bounds = Bounds::new(25, 75);
    [
        jitter(HueStep::Offset(120), 10.0, NEAR_SAT, NEAR_LIGHT),
        jitter(HueStep::Offset(240), 10.0, NEAR_SAT, NEAR_LIGHT),
        jitter(HueStep::Offset(0), 12.5, WIDE_SAT, WIDE_LIGHT),
        jitter(HueStep::Offset(120), 12.5, WIDE_SAT, WIDE_LIGHT),
    ]
};

static TETRADIC: [Step; 4] = {
    const NEAR_SAT: Bounds = Bounds::new(40, 85);
    const NEAR_LIGHT: Bounds = Bounds::new(30, 70);
    const WIDE_SAT: Bounds = Bounds::new(35, 80);
    const WIDE_LIGHT: Bounds = Bounds::new(25, 75);
    [
        jitter(HueStep::Offset(90), 12.5, NEAR_SAT, NEAR_LIGHT),
        jitter(HueStep::Offset(180), 12.5, NEAR_SAT, NEAR_LIGHT),
        jitter(HueStep::Offset(270), 12.5, NEAR_SAT, NEAR_LIGHT),
        jitter(HueStep::OneOf(&[0, 90, 180, 270]), 15.0, WIDE_SAT, WIDE_LIGHT),
    ]
};

static MIXED: [Step; 4] = [resample(180), resample(30), resample(-30), resample(120)];

fn steps(rule: HarmonyRule) -> &'static [Step; 4] {
    match rule {
        HarmonyRule::Monochromatic => &MONOCHROMATIC,
        HarmonyRule::Analogous => &ANALOGOUS,
        HarmonyRule::Complementary => &COMPLEMENTARY,
        HarmonyRule::SplitComplementary => &SPLIT_COMPLEMENTARY,
        HarmonyRule::Triadic => &TRIADIC,
        HarmonyRule::Tetradic => &TETRADIC,
        HarmonyRule::Mixed => &MIXED,
    }
}

/// `floor(r * n)`, kept below `n` even if a source returns values near 1.0.
fn below(source: &mut impl RandomSource, n: u16) -> u16 {
    let value = (source.next_unit() * f64::from(n)).floor() as u16;
    value.min(n.saturating_sub(1))
}

/// Rotates a hue by `offset` degrees, normalized into [0, 360).
fn rotate(hue: u16, offset: i32) -> u16 {
    (i32::from(hue) + offset).rem_euclid(360) as u16
}

/// Generates palettes from an owned random source.
///
/// # Examples
///
/// ```
/// use hue_harmony::generator::PaletteGenerator;
/// use hue_harmony::models::HarmonyRule;
///
/// let mut generator = PaletteGenerator::seeded(7);
/// let palette = generator.generate(HarmonyRule::Triadic);
/// assert_eq!(palette.len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct PaletteGenerator<R> {
    source: R,
}

impl PaletteGenerator<RngSource<ThreadRng>> {
    /// Generator backed by the thread-local RNG.
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(RngSource::thread())
    }
}

impl Default for PaletteGenerator<RngSource<ThreadRng>> {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteGenerator<RngSource<StdRng>> {
    /// Reproducible generator for a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_source(RngSource::seeded(seed))
    }
}

impl<R: RandomSource> PaletteGenerator<R> {
    /// Generator drawing from `source`.
    pub const fn with_source(source: R) -> Self {
        Self { source }
    }

    /// Gives the random source back.
    pub fn into_source(self) -> R {
        self.source
    }

    /// Samples a base color: hue in [0, 360), saturation in [50, 100),
    /// lightness in [30, 70).
    pub fn sample_color(&mut self) -> Color {
        let hue = BASE_HUE.sample(&mut self.source);
        let saturation = BASE_SATURATION.sample(&mut self.source) as u8;
        let lightness = BASE_LIGHTNESS.sample(&mut self.source) as u8;
        Color::new(hue, saturation, lightness)
    }

    /// Samples a base color and derives a palette from it.
    pub fn generate(&mut self, rule: HarmonyRule) -> Palette {
        let base = self.sample_color();
        self.derive(base, rule)
    }

    /// Like [`generate`](Self::generate), resolving the rule from a selector
    /// string. Unknown selectors use [`HarmonyRule::Mixed`].
    pub fn generate_from_selector(&mut self, selector: &str) -> Palette {
        let rule = HarmonyRule::from_name(selector).unwrap_or_else(|| {
            warn!(selector, "Unknown harmony rule, falling back to mixed");
            HarmonyRule::Mixed
        });
        self.generate(rule)
    }

    /// Derives a palette from a given base color. The base is kept at index 0.
    pub fn derive(&mut self, base: Color, rule: HarmonyRule) -> Palette {
        let mut colors = [base; 5];
        for (slot, step) in colors[1..].iter_mut().zip(steps(rule)) {
            *slot = self.apply(base, *step);
        }

        debug!(
            rule = rule.name(),
            base = %base.hsl(),
            hex = ?colors.iter().map(Color::hex).collect::<Vec<_>>(),
            "Generated palette"
        );

        Palette::new(rule, colors)
    }

    fn apply(&mut self, base: Color, step: Step) -> Color {
        let offset = match step.hue {
            HueStep::Offset(offset) => offset,
            HueStep::Coin {
                above_half,
                otherwise,
            } => {
                if self.source.next_unit() > 0.5 {
                    above_half
                } else {
                    otherwise
                }
            }
            HueStep::OneOf(offsets) => {
                let index = below(&mut self.source, offsets.len() as u16);
                offsets[usize::from(index)]
            }
        };
        let hue = rotate(base.hue(), offset);

        let (saturation, lightness) = match step.tone {
            ToneStep::Shift {
                saturation,
                lightness,
                saturation_bounds,
                lightness_bounds,
            } => (
                saturation_bounds.apply(f64::from(i32::from(base.saturation()) + saturation)),
                lightness_bounds.apply(f64::from(i32::from(base.lightness()) + lightness)),
            ),
            ToneStep::Jitter {
                spread,
                saturation_bounds,
                lightness_bounds,
            } => {
                let saturation = f64::from(base.saturation()) + self.noise(spread);
                let lightness = f64::from(base.lightness()) + self.noise(spread);
                (
                    saturation_bounds.apply(saturation),
                    lightness_bounds.apply(lightness),
                )
            }
            ToneStep::Resample {
                saturation,
                lightness,
            } => (
                saturation.sample(&mut self.source) as u8,
                lightness.sample(&mut self.source) as u8,
            ),
        };

        Color::new(hue, saturation, lightness)
    }

    /// Uniform noise in `[-spread, spread)`.
    fn noise(&mut self, spread: f64) -> f64 {
        (self.source.next_unit() - 0.5) * 2.0 * spread
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceSource;

    fn generator(values: &[f64]) -> PaletteGenerator<SequenceSource> {
        PaletteGenerator::with_source(SequenceSource::new(values))
    }

    fn triples(palette: &Palette) -> Vec<(u16, u8, u8)> {
        palette
            .iter()
            .map(|c| (c.hue(), c.saturation(), c.lightness()))
            .collect()
    }

    #[test]
    fn test_sample_color_ranges() {
        assert_eq!(generator(&[0.0]).sample_color(), Color::new(0, 50, 30));
        assert_eq!(generator(&[0.5]).sample_color(), Color::new(180, 75, 50));
        assert_eq!(generator(&[0.999_999]).sample_color(), Color::new(359, 99, 69));
    }

    #[test]
    fn test_monochromatic_exact() {
        let palette = generator(&[0.5]).generate(HarmonyRule::Monochromatic);
        assert_eq!(
            triples(&palette),
            vec![
                (180, 75, 50),
                (180, 60, 38),
                (180, 75, 50),
                (180, 90, 62),
                (180, 90, 74),
            ]
        );
    }

    #[test]
    fn test_analogous_exact() {
        // Base 180/75/50, then (sat, light) draws for each derived color
        let palette = generator(&[0.5, 0.5, 0.5, 0.0, 0.0, 0.999_999, 0.25, 0.5, 0.5, 0.75])
            .generate(HarmonyRule::Analogous);
        assert_eq!(
            triples(&palette),
            vec![
                (180, 75, 50),
                (160, 65, 40),
                (180, 85, 45),
                (200, 75, 50),
                // Tenth draw, then the sequence wraps to 0.5
                (220, 80, 50),
            ]
        );
    }

    #[test]
    fn test_complementary_exact() {
        let palette = generator(&[0.0, 0.999_999, 0.999_999, 0.0, 0.0, 1.0, 1.0, 0.5, 0.5])
            .generate(HarmonyRule::Complementary);
        // Base 0/99/69; the direct complement is clamped to the rule bounds
        assert_eq!(
            triples(&palette),
            vec![
                (0, 99, 69),
                (180, 90, 69),
                (0, 84, 54),
                (0, 90, 75),
                (180, 90, 69),
            ]
        );
    }

    #[test]
    fn test_split_complementary_coin() {
        let base = Color::new(100, 60, 50);
        let above = generator(&[0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.9, 0.5, 0.5])
            .derive(base, HarmonyRule::SplitComplementary);
        let exactly_half = generator(&[0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5])
            .derive(base, HarmonyRule::SplitComplementary);

        let hues = |p: &Palette| p.iter().map(Color::hue).collect::<Vec<_>>();
        assert_eq!(hues(&above), vec![100, 250, 310, 100, 250]);
        assert_eq!(hues(&exactly_half), vec![100, 250, 310, 100, 310]);
    }

    #[test]
    fn test_triadic_exact() {
        let palette = generator(&[0.5, 0.5, 0.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0])
            .generate(HarmonyRule::Triadic);
        // Noise of -10 then -12.5 (rounded away from zero)
        assert_eq!(
            triples(&palette),
            vec![
                (180, 75, 50),
                (300, 65, 40),
                (60, 65, 40),
                (180, 63, 38),
                (300, 63, 38),
            ]
        );
    }

    #[test]
    fn test_tetradic_extra_hue_pick() {
        let base = Color::new(10, 60, 50);
        for (draw, expected) in [(0.0, 10), (0.3, 100), (0.6, 190), (0.99, 280)] {
            let palette = generator(&[0.5, 0.5, 0.5, 0.5, 0.5, 0.5, draw, 0.5, 0.5])
                .derive(base, HarmonyRule::Tetradic);
            let hues: Vec<u16> = palette.iter().map(Color::hue).collect();
            assert_eq!(hues, vec![10, 100, 190, 280, expected]);
        }
    }

    #[test]
    fn test_mixed_resamples_independently_of_base() {
        let base = Color::new(10, 99, 69);
        let palette = generator(&[0.0, 0.0, 0.999_999, 0.999_999, 0.5, 0.5, 0.1, 0.9])
            .derive(base, HarmonyRule::Mixed);
        assert_eq!(
            triples(&palette),
            vec![
                (10, 99, 69),
                (190, 50, 30),
                (40, 79, 69),
                (340, 65, 50),
                (130, 53, 66),
            ]
        );
    }

    #[test]
    fn test_draw_counts_per_rule() {
        let expected = [
            (HarmonyRule::Monochromatic, 3),
            (HarmonyRule::Analogous, 11),
            (HarmonyRule::Complementary, 9),
            (HarmonyRule::SplitComplementary, 12),
            (HarmonyRule::Triadic, 11),
            (HarmonyRule::Tetradic, 12),
            (HarmonyRule::Mixed, 11),
        ];
        for (rule, draws) in expected {
            let mut generator = generator(&[0.3]);
            generator.generate(rule);
            assert_eq!(generator.into_source().draws(), draws, "{rule}");
        }
    }

    #[test]
    fn test_rotate_wraps_both_directions() {
        assert_eq!(rotate(350, 20), 10);
        assert_eq!(rotate(10, -30), 340);
        assert_eq!(rotate(0, 360), 0);
    }

    #[test]
    fn test_bounds_apply_rounds_then_clamps() {
        let bounds = Bounds::new(40, 85);
        assert_eq!(bounds.apply(62.5), 63);
        assert_eq!(bounds.apply(62.49), 62);
        assert_eq!(bounds.apply(12.0), 40);
        assert_eq!(bounds.apply(112.5), 85);
        assert_eq!(bounds.apply(85.49), 85);
    }
}
