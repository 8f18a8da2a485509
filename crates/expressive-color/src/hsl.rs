// SPDX-License-Identifier: MIT
//
// HSL: hue/saturation/lightness, the working space for palette derivation.
//
// Hue is in degrees [0, 360), saturation and lightness in percent [0, 100].
// HSL is never stored; it exists only between parsing a source color and
// serializing the derived ones.
//
// The arithmetic below keeps the textbook operation order (no fused
// multiply-add) so that derived hex strings are reproducible bit-for-bit.
#![allow(clippy::suboptimal_flops)]

use crate::error::ColorError;
use crate::rgb::Rgb;

/// A color in HSL space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    /// Hue angle in degrees, `[0, 360)`.
    pub h: f64,
    /// Saturation in percent, `[0, 100]`.
    pub s: f64,
    /// Lightness in percent, `[0, 100]`.
    pub l: f64,
}

impl Hsl {
    /// The degenerate value produced by [`hex_to_hsl_lossy`] for input that
    /// does not parse. Every component is NaN.
    pub const NAN: Self = Self::new(f64::NAN, f64::NAN, f64::NAN);

    #[inline]
    #[must_use]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Whether any component is NaN.
    #[must_use]
    pub fn is_nan(self) -> bool {
        self.h.is_nan() || self.s.is_nan() || self.l.is_nan()
    }

    /// Convert an 8-bit sRGB color to HSL.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_rgb(rgb: Rgb) -> Self {
        let (r, g, b) = rgb.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // Achromatic
            return Self::new(0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Self::new(h / 6.0 * 360.0, s * 100.0, l * 100.0)
    }

    /// Convert to 8-bit sRGB.
    ///
    /// Uses the chroma / intermediate / match construction: hue picks one of
    /// six 60° sectors that decides where chroma `C` and the intermediate `X`
    /// land, then the match offset `m` lifts all three channels. Hue outside
    /// `[0, 360)` wraps.
    #[must_use]
    pub fn to_rgb(self) -> Rgb {
        let h = normalize_hue(self.h);
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = if (0.0..60.0).contains(&h) {
            (c, x, 0.0)
        } else if (60.0..120.0).contains(&h) {
            (x, c, 0.0)
        } else if (120.0..180.0).contains(&h) {
            (0.0, c, x)
        } else if (180.0..240.0).contains(&h) {
            (0.0, x, c)
        } else if (240.0..300.0).contains(&h) {
            (x, 0.0, c)
        } else {
            (c, 0.0, x)
        };

        Rgb::from_unit(r + m, g + m, b + m)
    }

    /// Convert to a `#rrggbb` string.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_rgb().to_hex()
    }

    /// Add `delta` to lightness, clamped to `[0, 100]`.
    #[inline]
    #[must_use]
    pub fn adjust_lightness(self, delta: f64) -> Self {
        Self {
            l: (self.l + delta).clamp(0.0, 100.0),
            ..self
        }
    }

    /// Replace lightness. No clamping: callers bound it themselves.
    #[inline]
    #[must_use]
    pub const fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    #[inline]
    #[must_use]
    pub const fn with_saturation(self, s: f64) -> Self {
        Self { s, ..self }
    }

    /// Shift the hue by `degrees` (wraps around 360°).
    #[inline]
    #[must_use]
    pub fn rotate_hue(self, degrees: f64) -> Self {
        Self {
            h: normalize_hue(self.h + degrees),
            ..self
        }
    }
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }
}

// ─── Free-function API ───────────────────────────────────────────────────────

/// Parse a hex color and convert it to HSL.
///
/// # Errors
///
/// Returns [`ColorError`] if `hex` is not a valid `#rgb` / `#rrggbb` color.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    Rgb::from_hex(hex).map(Hsl::from_rgb)
}

/// Permissive variant of [`hex_to_hsl`]: malformed input yields
/// [`Hsl::NAN`] instead of an error.
#[must_use]
pub fn hex_to_hsl_lossy(hex: &str) -> Hsl {
    hex_to_hsl(hex).unwrap_or(Hsl::NAN)
}

/// Convert HSL components to a `#rrggbb` string.
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    Hsl::new(h, s, l).to_hex()
}

/// Return `hsl` with `delta` added to its lightness, clamped to `[0, 100]`.
#[must_use]
pub fn adjust_lightness(hsl: Hsl, delta: f64) -> Hsl {
    hsl.adjust_lightness(delta)
}

/// Normalize a hue angle to the range [0, 360).
#[inline]
fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
