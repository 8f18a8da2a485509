//! # expressive-theme: Accent Theme Engine
//!
//! Derives a full set of role colors from one user-picked source color and
//! projects them, together with shape and typography tokens, onto a style
//! target as named custom properties.
//!
//! # Architecture
//!
//! ```text
//! source hex ("#6750a4")
//!     │
//!     ▼
//! expressive-color: parse → Rgb → Hsl
//!     │
//!     ▼
//! scheme.rs:  rotate hue / scale saturation per group rule,
//!             lift lightness for containers, pick on-colors
//!     │
//!     ▼
//! role.rs:    twelve named role slots (primary … on-tertiary-container)
//!     │
//!     ▼
//! style.rs:   apply onto any StyleTarget (last write wins)
//! ```
//!
//! Derivation is a pure function of the source color. Nothing is cached
//! and nothing is remembered between calls; every color change recomputes
//! the whole scheme.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]

pub mod appearance;
pub mod config;
pub mod role;
pub mod scheme;
pub mod shape;
pub mod style;
pub mod typography;

pub use appearance::Appearance;
pub use config::{ConfigError, ThemeConfig};
pub use role::{Role, RoleGroupKind};
pub use scheme::{RoleGroup, Scheme};
pub use shape::ShapeScale;
pub use style::{StyleSheet, StyleTarget};
pub use typography::TypeAxes;
