//! Theme configuration and `:set`-style directives.
//!
//! A [`ThemeConfig`] holds every user-facing knob of the page theme. It can
//! be built in code with the `with_*` methods or edited with space-separated
//! directives:
//!
//! | Syntax            | Effect                    |
//! |-------------------|---------------------------|
//! | `option=value`    | Assign a value            |
//! | `option`          | Enable a boolean option   |
//! | `nooption`        | Disable a boolean option  |
//! | `option!`         | Toggle a boolean option   |
//!
//! # Option names
//!
//! | Full name | Abbrev | Type    | Default   |
//! |-----------|--------|---------|-----------|
//! | `source`  | `src`  | color   | `#6750a4` |
//! | `radius`  | `r`    | integer | 16        |
//! | `weight`  | `wght` | integer | 400       |
//! | `width`   | `wdth` | integer | 100       |
//! | `dark`    | `dm`   | bool    | false     |

use expressive_color::{ColorError, Rgb};
use thiserror::Error;
use tracing::debug;

use crate::appearance::Appearance;
use crate::scheme::Scheme;
use crate::shape::ShapeScale;
use crate::style::{StyleSheet, apply_scheme, apply_shape, apply_type_axes};
use crate::typography::TypeAxes;

/// The violet the page starts with before the user picks anything.
pub const DEFAULT_SOURCE: Rgb = Rgb::new(0x67, 0x50, 0xa4);

pub const DEFAULT_RADIUS: u32 = 16;

/// Errors from editing a [`ThemeConfig`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("invalid color for {option}: {source}")]
    InvalidColor {
        option: String,
        #[source]
        source: ColorError,
    },

    #[error("invalid number for {option}: {value:?}")]
    InvalidNumber { option: String, value: String },

    #[error("{0} is not a boolean option")]
    NotBoolean(String),

    #[error("{0} requires a value")]
    MissingValue(String),
}

// ---------------------------------------------------------------------------
// Directives
// ---------------------------------------------------------------------------

/// A parsed directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetDirective {
    /// `option`: enable a boolean option.
    On(String),

    /// `nooption`: disable a boolean option.
    Off(String),

    /// `option!`: toggle a boolean option.
    Toggle(String),

    /// `option=value`: assign a value.
    Assign(String, String),
}

/// Parse space-separated directives. Empty input yields no directives.
#[must_use]
pub fn parse_set(args: &str) -> Vec<SetDirective> {
    args.split_whitespace().map(parse_set_arg).collect()
}

/// Parse a single directive.
#[must_use]
pub fn parse_set_arg(arg: &str) -> SetDirective {
    // Assignment: option=value
    if let Some((name, value)) = arg.split_once('=') {
        return SetDirective::Assign(name.to_string(), value.to_string());
    }

    // Toggle: option!
    if let Some(name) = arg.strip_suffix('!') {
        return SetDirective::Toggle(name.to_string());
    }

    // Negation: nooption (only when the rest is a known boolean)
    match arg.strip_prefix("no") {
        Some(name) if is_bool_option(name) => return SetDirective::Off(name.to_string()),
        _ => {}
    }

    SetDirective::On(arg.to_string())
}

/// Canonical option name for a full name or abbreviation.
#[must_use]
pub fn canonical_name(name: &str) -> Option<&'static str> {
    Some(match name {
        "source" | "src" => "source",
        "radius" | "r" => "radius",
        "weight" | "wght" => "weight",
        "width" | "wdth" => "width",
        "dark" | "dm" => "dark",
        _ => return None,
    })
}

/// Returns `true` if `name` is a known boolean option.
#[must_use]
pub fn is_bool_option(name: &str) -> bool {
    canonical_name(name) == Some("dark")
}

// ---------------------------------------------------------------------------
// ThemeConfig
// ---------------------------------------------------------------------------

/// Everything needed to render the page theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeConfig {
    pub source: Rgb,
    pub appearance: Appearance,
    pub radius: u32,
    pub axes: TypeAxes,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE,
            appearance: Appearance::Light,
            radius: DEFAULT_RADIUS,
            axes: TypeAxes::default(),
        }
    }
}

impl ThemeConfig {
    #[must_use]
    pub const fn with_source(mut self, source: Rgb) -> Self {
        self.source = source;
        self
    }

    #[must_use]
    pub const fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    #[must_use]
    pub const fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub const fn with_font_weight(mut self, weight: u16) -> Self {
        self.axes.weight = weight;
        self
    }

    #[must_use]
    pub const fn with_font_width(mut self, width: u16) -> Self {
        self.axes.width = width;
        self
    }

    /// Apply space-separated directives in order.
    ///
    /// Stops at the first bad directive; earlier ones stay applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for unknown options, malformed values, or
    /// boolean syntax on a non-boolean option.
    pub fn apply_set(&mut self, args: &str) -> Result<(), ConfigError> {
        for directive in parse_set(args) {
            self.apply_directive(&directive)?;
        }
        Ok(())
    }

    /// Apply one directive.
    ///
    /// # Errors
    ///
    /// See [`ThemeConfig::apply_set`].
    pub fn apply_directive(&mut self, directive: &SetDirective) -> Result<(), ConfigError> {
        debug!(?directive, "applying theme directive");
        match directive {
            SetDirective::On(name) | SetDirective::Off(name) | SetDirective::Toggle(name) => {
                let canonical =
                    canonical_name(name).ok_or_else(|| ConfigError::UnknownOption(name.clone()))?;
                if canonical != "dark" {
                    return Err(if matches!(directive, SetDirective::On(_)) {
                        ConfigError::MissingValue(name.clone())
                    } else {
                        ConfigError::NotBoolean(name.clone())
                    });
                }
                self.appearance = match directive {
                    SetDirective::On(_) => Appearance::Dark,
                    SetDirective::Off(_) => Appearance::Light,
                    _ => self.appearance.toggle(),
                };
            }
            SetDirective::Assign(name, value) => {
                let canonical =
                    canonical_name(name).ok_or_else(|| ConfigError::UnknownOption(name.clone()))?;
                match canonical {
                    "source" => {
                        self.source = Rgb::from_hex(value).map_err(|source| {
                            ConfigError::InvalidColor { option: name.clone(), source }
                        })?;
                    }
                    "radius" => self.radius = parse_number(name, value)?,
                    "weight" => self.axes.weight = parse_number(name, value)?,
                    "width" => self.axes.width = parse_number(name, value)?,
                    _ => self.appearance = Appearance::from_dark(parse_bool(name, value)?),
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn scheme(&self) -> Scheme {
        Scheme::from_source(self.source)
    }

    #[must_use]
    pub fn shape(&self) -> ShapeScale {
        ShapeScale::from_base(self.radius)
    }

    /// Project every token onto a fresh stylesheet: twelve role colors,
    /// three radii, two font axes, and the dark-mode root class.
    #[must_use]
    pub fn render(&self) -> StyleSheet {
        let mut sheet = StyleSheet::new();
        apply_scheme(&mut sheet, &self.scheme());
        apply_shape(&mut sheet, &self.shape());
        apply_type_axes(&mut sheet, &self.axes);
        sheet.set_root_class(self.appearance.root_class());
        sheet
    }
}

fn parse_number<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        option: name.to_owned(),
        value: value.to_owned(),
    })
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidNumber {
            option: name.to_owned(),
            value: value.to_owned(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
