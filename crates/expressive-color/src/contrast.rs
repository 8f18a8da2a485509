// SPDX-License-Identifier: MIT
//
// On-color selection: black or white text on top of a role color.
//
// The choice is a single threshold on perceived luminance
//
//   Y = (0.299·R + 0.587·G + 0.114·B) / 255      (R, G, B in 0–255)
//
// with Y > 0.5 choosing black and everything else, including exactly 0.5,
// choosing white.

use std::fmt;

use crate::error::ColorError;
use crate::rgb::Rgb;

/// Luminance above which black text is used.
pub const LUMINANCE_THRESHOLD: f64 = 0.5;

/// Perceived luminance of an 8-bit color, in `[0.0, 1.0]`.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn perceived_luminance(rgb: Rgb) -> f64 {
    let r = f64::from(rgb.r);
    let g = f64::from(rgb.g);
    let b = f64::from(rgb.b);
    (0.299 * r + 0.587 * g + 0.114 * b) / 255.0
}

/// A legible foreground for text and icons drawn over a colored surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OnColor {
    Black,
    White,
}

impl OnColor {
    /// Pick the on-color for a background of the given perceived luminance.
    #[must_use]
    pub fn for_luminance(luminance: f64) -> Self {
        if luminance > LUMINANCE_THRESHOLD {
            Self::Black
        } else {
            Self::White
        }
    }

    /// `#000000` or `#FFFFFF`.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Black => "#000000",
            Self::White => "#FFFFFF",
        }
    }

    #[must_use]
    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Black => Rgb::BLACK,
            Self::White => Rgb::WHITE,
        }
    }
}

impl fmt::Display for OnColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

/// Return `"#000000"` or `"#FFFFFF"`, whichever reads better on `hex`.
///
/// # Errors
///
/// Returns [`ColorError`] if `hex` is not a valid `#rgb` / `#rrggbb` color.
pub fn contrast_color(hex: &str) -> Result<&'static str, ColorError> {
    Ok(Rgb::from_hex(hex)?.on_color().hex())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    // ── Perceived luminance ─────────────────────────────────────────

    #[test]
    fn luminance_black_is_zero() {
        assert!(approx_eq(perceived_luminance(Rgb::BLACK), 0.0, 1e-12));
    }

    #[test]
    fn luminance_white_is_one() {
        let lum = perceived_luminance(Rgb::WHITE);
        assert!(approx_eq(lum, 1.0, 1e-9), "White luminance: {lum}");
    }

    #[test]
    fn luminance_weights() {
        assert!(approx_eq(perceived_luminance(Rgb::new(255, 0, 0)), 0.299, 1e-9));
        assert!(approx_eq(perceived_luminance(Rgb::new(0, 255, 0)), 0.587, 1e-9));
        assert!(approx_eq(perceived_luminance(Rgb::new(0, 0, 255)), 0.114, 1e-9));
    }

    // ── Threshold ───────────────────────────────────────────────────

    #[test]
    fn exactly_half_is_white() {
        assert_eq!(OnColor::for_luminance(0.5), OnColor::White);
    }

    #[test]
    fn just_above_half_is_black() {
        assert_eq!(OnColor::for_luminance(0.500_001), OnColor::Black);
    }

    #[test]
    fn mid_gray_tips_to_black() {
        // 128/255 is a hair above 0.5.
        assert_eq!(contrast_color("#808080"), Ok("#000000"));
        assert_eq!(contrast_color("#7f7f7f"), Ok("#FFFFFF"));
    }

    // ── contrast_color ──────────────────────────────────────────────

    #[test]
    fn black_gets_white() {
        assert_eq!(contrast_color("#000000"), Ok("#FFFFFF"));
    }

    #[test]
    fn white_gets_black() {
        assert_eq!(contrast_color("#FFFFFF"), Ok("#000000"));
    }

    #[test]
    fn yellow_and_blue() {
        assert_eq!(contrast_color("#ffff00"), Ok("#000000"));
        assert_eq!(contrast_color("#0000ff"), Ok("#FFFFFF"));
    }

    #[test]
    fn violet_gets_white() {
        assert_eq!(contrast_color("#6750A4"), Ok("#FFFFFF"));
    }

    #[test]
    fn shorthand_is_expanded_first() {
        assert_eq!(contrast_color("#fff"), Ok("#000000"));
    }

    #[test]
    fn malformed_is_an_error() {
        assert_eq!(contrast_color("#ff"), Err(ColorError::InvalidLength(2)));
    }

    #[test]
    fn display_and_rgb() {
        assert_eq!(OnColor::White.to_string(), "#FFFFFF");
        assert_eq!(OnColor::Black.rgb(), Rgb::BLACK);
    }
}
