//! Corner-radius scale derived from a single base radius.
//!
//! Small and medium radii are fixed fractions of the base, with a minimum so
//! tight corners never collapse to square:
//!
//! | Token            | Value                       |
//! |------------------|-----------------------------|
//! | `--radius-small` | max(2, round(base × 0.3))px |
//! | `--radius-medium`| max(4, round(base × 0.6))px |
//! | `--radius-large` | base px                     |

/// Derived corner radii, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeScale {
    pub small: u32,
    pub medium: u32,
    pub large: u32,
}

impl ShapeScale {
    pub const MIN_SMALL: u32 = 2;
    pub const MIN_MEDIUM: u32 = 4;

    #[must_use]
    pub fn from_base(base: u32) -> Self {
        Self {
            small: scaled(base, 0.3).max(Self::MIN_SMALL),
            medium: scaled(base, 0.6).max(Self::MIN_MEDIUM),
            large: base,
        }
    }

    /// `(property, value)` pairs, smallest first.
    #[must_use]
    pub fn declarations(&self) -> [(&'static str, String); 3] {
        [
            ("--radius-small", format!("{}px", self.small)),
            ("--radius-medium", format!("{}px", self.medium)),
            ("--radius-large", format!("{}px", self.large)),
        ]
    }
}

impl Default for ShapeScale {
    fn default() -> Self {
        Self::from_base(16)
    }
}

/// `round(base × factor)`, halves rounded up.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn scaled(base: u32, factor: f64) -> u32 {
    // Non-negative and at most `base`, so the cast cannot wrap.
    (f64::from(base) * factor).round() as u32
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base() {
        let s = ShapeScale::from_base(16);
        assert_eq!((s.small, s.medium, s.large), (5, 10, 16));
    }

    #[test]
    fn rounds_half_up() {
        // 5 × 0.3 = 1.5 → 2, 5 × 0.6 = 3 → clamped to 4
        let s = ShapeScale::from_base(5);
        assert_eq!((s.small, s.medium, s.large), (2, 4, 5));
    }

    #[test]
    fn zero_base_keeps_minimums() {
        let s = ShapeScale::from_base(0);
        assert_eq!((s.small, s.medium, s.large), (2, 4, 0));
    }

    #[test]
    fn large_base() {
        let s = ShapeScale::from_base(28);
        assert_eq!((s.small, s.medium, s.large), (8, 17, 28));
    }

    #[test]
    fn declarations_are_px() {
        let d = ShapeScale::from_base(16).declarations();
        assert_eq!(d[0], ("--radius-small", "5px".to_owned()));
        assert_eq!(d[2], ("--radius-large", "16px".to_owned()));
    }

    #[test]
    fn monotone() {
        for base in 0..=64 {
            let s = ShapeScale::from_base(base);
            assert!(s.small <= s.medium, "base {base}: {s:?}");
            if base >= 7 {
                assert!(s.medium <= s.large, "base {base}: {s:?}");
            }
        }
    }
}
