// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Why a string could not be read as a hex color.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Nothing left after trimming whitespace and the optional `#`.
    #[error("empty color string")]
    Empty,

    /// Hex colors are 3 (`#rgb`) or 6 (`#rrggbb`) digits long.
    #[error("expected 3 or 6 hex digits, found {0}")]
    InvalidLength(usize),

    /// A character outside `0-9a-fA-F`. `index` counts digits after the `#`.
    #[error("invalid hex digit {digit:?} at position {index}")]
    InvalidDigit { digit: char, index: usize },
}
