// SPDX-License-Identifier: MIT
//
// 24-bit sRGB colors and their hex serialization.
//
// Accepted input:   `#rgb`, `#rrggbb`, `rgb`, `rrggbb` (any case, padded
//                   with whitespace is fine)
// Canonical output: `#rrggbb`, lowercase, always 7 characters
//
// Shorthand expands by digit duplication: `#abc` is `#aabbcc`.

use std::fmt;
use std::str::FromStr;

use crate::contrast::{OnColor, perceived_luminance};
use crate::error::ColorError;

/// An 8-bit-per-channel sRGB color.
///
/// The `[0, 255]` channel invariant is carried by the type itself, so any
/// `Rgb` value is a displayable color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] when the string is empty, is not 3 or 6 digits
    /// long, or contains a non-hex character.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        parse_hex(s)
    }

    /// Channels normalized to `[0.0, 1.0]`.
    #[must_use]
    pub fn to_unit(self) -> (f64, f64, f64) {
        (
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Build from normalized channels. Each value is scaled to `[0, 255]`,
    /// rounded half-up, and clamped; NaN maps to 0.
    #[must_use]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self::new(unit_to_u8(r), unit_to_u8(g), unit_to_u8(b))
    }

    /// Canonical `#rrggbb` form.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Black or white, whichever reads better on top of this color.
    #[must_use]
    pub fn on_color(self) -> OnColor {
        OnColor::for_luminance(perceived_luminance(self))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Result<Rgb, ColorError> {
    let s = s.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);

    let len = digits.chars().count();
    match len {
        0 => return Err(ColorError::Empty),
        3 | 6 => {}
        n => return Err(ColorError::InvalidLength(n)),
    }

    let mut nibbles = [0u8; 6];
    for (index, digit) in digits.chars().enumerate() {
        nibbles[index] = parse_hex_digit(digit).ok_or(ColorError::InvalidDigit { digit, index })?;
    }

    Ok(if len == 3 {
        // #RGB
        let [r, g, b, ..] = nibbles;
        Rgb::new(r << 4 | r, g << 4 | g, b << 4 | b)
    } else {
        // #RRGGBB
        Rgb::new(
            nibbles[0] << 4 | nibbles[1],
            nibbles[2] << 4 | nibbles[3],
            nibbles[4] << 4 | nibbles[5],
        )
    })
}

#[inline]
const fn parse_hex_digit(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='f' => Some(c as u8 - b'a' + 10),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

/// Convert a float (0.0–1.0) to a u8 (0–255), rounding halves up.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation,
    // and a NaN cast saturates to 0.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
