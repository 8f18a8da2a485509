// SPDX-License-Identifier: MIT
//
// expressive-color: the color math behind the accent theme engine.
//
// Everything here is a pure function of its inputs. A user-picked hex
// color is parsed into an 8-bit `Rgb`, lifted into HSL where hue rotation
// and lightness/saturation adjustments are simple arithmetic, and brought
// back down to `#rrggbb`. On-colors (legible text over a role color) are
// chosen by a perceived-luminance threshold rather than by hue math.
//
// Conversion pipeline:
//
//   "#rgb" / "#rrggbb"  ↔  Rgb (u8 × 3)  ↔  Hsl (f64 degrees / percent)
//
// Parsing is strict: malformed input is a `ColorError`, never a silent
// NaN. Callers that want the permissive garbage-in, garbage-out behavior
// ask for it explicitly through `hex_to_hsl_lossy`.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/saturation/lightness names are inherently similar.
#![allow(clippy::similar_names)]

pub mod contrast;
pub mod error;
pub mod hsl;
pub mod rgb;

pub use contrast::{OnColor, contrast_color, perceived_luminance};
pub use error::ColorError;
pub use hsl::{Hsl, adjust_lightness, hex_to_hsl, hex_to_hsl_lossy, hsl_to_hex};
pub use rgb::Rgb;
