//! Property-based invariant tests for hex ↔ HSL conversion.
//!
//! 1. Any 6-digit hex color maps into the HSL ranges.
//! 2. Shorthand parses the same as its duplicated long form.
//! 3. hex → HSL → hex is exact.
//! 4. HSL → hex → HSL stays within one unit where quantization allows.
//! 5. Lightness adjustment stays clamped and leaves hue/saturation alone.
//! 6. On-color agrees with the luminance threshold.
//! 7. Arbitrary strings never panic the parser.

use expressive_color::{Hsl, OnColor, Rgb, adjust_lightness, hex_to_hsl, hsl_to_hex, perceived_luminance};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn rgb_strategy() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

fn hue_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Range
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hsl_components_in_range(rgb in rgb_strategy()) {
        let hsl = hex_to_hsl(&rgb.to_hex()).unwrap();
        prop_assert!((0.0..360.0).contains(&hsl.h), "h out of range: {:?} from {}", hsl, rgb);
        prop_assert!((0.0..=100.0).contains(&hsl.s), "s out of range: {:?} from {}", hsl, rgb);
        prop_assert!((0.0..=100.0).contains(&hsl.l), "l out of range: {:?} from {}", hsl, rgb);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Shorthand expansion
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn shorthand_equals_long_form(r in 0u8..16, g in 0u8..16, b in 0u8..16) {
        let short = format!("#{r:x}{g:x}{b:x}");
        let long = format!("#{r:x}{r:x}{g:x}{g:x}{b:x}{b:x}");
        prop_assert_eq!(hex_to_hsl(&short), hex_to_hsl(&long));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. hex → HSL → hex
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hex_roundtrip_is_exact(rgb in rgb_strategy()) {
        let hex = rgb.to_hex();
        let back = hex_to_hsl(&hex).unwrap().to_hex();
        prop_assert_eq!(back, hex);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. HSL → hex → HSL
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    // Chroma of at least ~0.5 keeps the 8-bit quantization error on hue
    // below one degree; near-gray colors have an ill-conditioned hue.
    #[test]
    fn hsl_roundtrip_within_one_unit(h in 0.0f64..360.0, s in 70.0f64..=100.0, l in 35.0f64..=65.0) {
        let back = hex_to_hsl(&hsl_to_hex(h, s, l)).unwrap();
        prop_assert!(hue_diff(back.h, h) <= 1.0, "h: {} -> {}", h, back.h);
        prop_assert!((back.s - s).abs() <= 1.0, "s: {} -> {}", s, back.s);
        prop_assert!((back.l - l).abs() <= 1.0, "l: {} -> {}", l, back.l);
    }

    #[test]
    fn lightness_roundtrip_everywhere(h in 0.0f64..360.0, s in 0.0f64..=100.0, l in 0.0f64..=100.0) {
        let back = hex_to_hsl(&hsl_to_hex(h, s, l)).unwrap();
        prop_assert!((back.l - l).abs() <= 1.0, "l: {} -> {}", l, back.l);
    }

    #[test]
    fn hsl_to_hex_is_canonical(h in -720.0f64..720.0, s in 0.0f64..=100.0, l in 0.0f64..=100.0) {
        let hex = hsl_to_hex(h, s, l);
        prop_assert_eq!(hex.len(), 7);
        prop_assert_eq!(Rgb::from_hex(&hex).unwrap().to_hex(), hex);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Lightness adjustment
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn adjust_lightness_clamps(h in 0.0f64..360.0, s in 0.0f64..=100.0, l in 0.0f64..=100.0, delta in -200.0f64..200.0) {
        let out = adjust_lightness(Hsl::new(h, s, l), delta);
        prop_assert!((0.0..=100.0).contains(&out.l));
        prop_assert_eq!(out.h, h);
        prop_assert_eq!(out.s, s);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. On-color threshold
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn on_color_matches_threshold(rgb in rgb_strategy()) {
        let expected = if perceived_luminance(rgb) > 0.5 { OnColor::Black } else { OnColor::White };
        prop_assert_eq!(rgb.on_color(), expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. No panics
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn parser_never_panics(s in "\\PC{0,12}") {
        let _ = Rgb::from_hex(&s);
    }
}
