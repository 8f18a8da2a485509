//! Variable-font axes exposed as custom properties.
//!
//! The stylesheet feeds `--font-weight` and `--font-width` into
//! `font-variation-settings`; this module only owns the values.

/// Weight (`wght`) and width (`wdth`) axis values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeAxes {
    pub weight: u16,
    pub width: u16,
}

impl TypeAxes {
    pub const DEFAULT_WEIGHT: u16 = 400;
    pub const DEFAULT_WIDTH: u16 = 100;

    #[must_use]
    pub const fn new(weight: u16, width: u16) -> Self {
        Self { weight, width }
    }

    #[must_use]
    pub fn declarations(&self) -> [(&'static str, String); 2] {
        [
            ("--font-weight", self.weight.to_string()),
            ("--font-width", self.width.to_string()),
        ]
    }
}

impl Default for TypeAxes {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WEIGHT, Self::DEFAULT_WIDTH)
    }
}
