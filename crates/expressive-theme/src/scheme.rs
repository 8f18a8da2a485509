//! Scheme derivation: from one source color to twelve role colors.
//!
//! Each role group is produced by a [`GroupRule`] applied to the source's
//! HSL:
//!
//! | Group     | Hue       | Saturation         | Lightness          | Container lift |
//! |-----------|-----------|--------------------|--------------------|----------------|
//! | primary   | source    | source             | source             | +40            |
//! | secondary | +30°      | max(10, s × 0.6)   | clamp(l, 20, 90)   | +35            |
//! | tertiary  | +300°     | max(10, s × 0.5)   | source             | +40            |
//!
//! Containers keep the group's hue and saturation, and their lightness is
//! capped at 95. Every role and container gets a black or white on-color
//! by perceived luminance.
//!
//! The primary role color is the source itself, normalized to `#rrggbb`.

use std::collections::BTreeMap;

use expressive_color::{ColorError, Hsl, OnColor, Rgb};
use tracing::trace;

use crate::role::{Role, RoleGroupKind};

/// Containers never get lighter than this.
pub const CONTAINER_LIGHTNESS_CAP: f64 = 95.0;

// ---------------------------------------------------------------------------
// GroupRule
// ---------------------------------------------------------------------------

/// How one role group is derived from the source color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupRule {
    pub kind: RoleGroupKind,
    /// Degrees added to the source hue (wrapped to `[0, 360)`).
    pub hue_shift: f64,
    /// Factor applied to the source saturation.
    pub saturation_scale: f64,
    /// Lower bound on the scaled saturation.
    pub saturation_floor: f64,
    /// Bounds the source lightness is clamped into.
    pub lightness_range: (f64, f64),
    /// Lightness added for the container, before the cap.
    pub container_lift: f64,
}

impl GroupRule {
    pub const PRIMARY: Self = Self {
        kind: RoleGroupKind::Primary,
        hue_shift: 0.0,
        saturation_scale: 1.0,
        saturation_floor: 0.0,
        lightness_range: (0.0, 100.0),
        container_lift: 40.0,
    };

    pub const SECONDARY: Self = Self {
        kind: RoleGroupKind::Secondary,
        hue_shift: 30.0,
        saturation_scale: 0.6,
        saturation_floor: 10.0,
        lightness_range: (20.0, 90.0),
        container_lift: 35.0,
    };

    /// Rotated 300°, i.e. 60° backwards.
    pub const TERTIARY: Self = Self {
        kind: RoleGroupKind::Tertiary,
        hue_shift: 300.0,
        saturation_scale: 0.5,
        saturation_floor: 10.0,
        lightness_range: (0.0, 100.0),
        container_lift: 40.0,
    };

    /// The rule for a group.
    #[must_use]
    pub const fn for_kind(kind: RoleGroupKind) -> Self {
        match kind {
            RoleGroupKind::Primary => Self::PRIMARY,
            RoleGroupKind::Secondary => Self::SECONDARY,
            RoleGroupKind::Tertiary => Self::TERTIARY,
        }
    }

    /// The group's base color in HSL.
    #[must_use]
    pub fn base(&self, source: Hsl) -> Hsl {
        let (lo, hi) = self.lightness_range;
        source
            .rotate_hue(self.hue_shift)
            .with_saturation((source.s * self.saturation_scale).max(self.saturation_floor))
            .with_lightness(source.l.clamp(lo, hi))
    }

    /// The container color derived from a base.
    #[must_use]
    pub fn container(&self, base: Hsl) -> Hsl {
        base.with_lightness((base.l + self.container_lift).min(CONTAINER_LIGHTNESS_CAP))
    }
}

// ---------------------------------------------------------------------------
// RoleGroup
// ---------------------------------------------------------------------------

/// The four colors of one role group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleGroup {
    pub role: Rgb,
    pub on_role: OnColor,
    pub container: Rgb,
    pub on_container: OnColor,
}

impl RoleGroup {
    /// Build a group from its base color. `role` overrides the color
    /// serialized for the role slot (the primary keeps the source as-is).
    fn build(rule: &GroupRule, base: Hsl, role: Rgb) -> Self {
        let container = rule.container(base).to_rgb();
        Self {
            role,
            on_role: role.on_color(),
            container,
            on_container: container.on_color(),
        }
    }
}

// ---------------------------------------------------------------------------
// Scheme
// ---------------------------------------------------------------------------

/// A complete role palette derived from one source color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheme {
    pub source: Rgb,
    pub primary: RoleGroup,
    pub secondary: RoleGroup,
    pub tertiary: RoleGroup,
}

impl Scheme {
    /// Derive all role groups from `source`.
    #[must_use]
    pub fn from_source(source: Rgb) -> Self {
        let hsl = Hsl::from_rgb(source);
        trace!(%source, h = hsl.h, s = hsl.s, l = hsl.l, "deriving scheme");

        let derive = |rule: GroupRule| {
            let base = rule.base(hsl);
            let role = if rule.kind == RoleGroupKind::Primary {
                source
            } else {
                base.to_rgb()
            };
            RoleGroup::build(&rule, base, role)
        };

        Self {
            source,
            primary: derive(GroupRule::PRIMARY),
            secondary: derive(GroupRule::SECONDARY),
            tertiary: derive(GroupRule::TERTIARY),
        }
    }

    /// Parse `hex` and derive the scheme.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] if `hex` is not a valid `#rgb` / `#rrggbb` color.
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        Rgb::from_hex(hex).map(Self::from_source)
    }

    #[must_use]
    pub const fn group(&self, kind: RoleGroupKind) -> &RoleGroup {
        match kind {
            RoleGroupKind::Primary => &self.primary,
            RoleGroupKind::Secondary => &self.secondary,
            RoleGroupKind::Tertiary => &self.tertiary,
        }
    }

    /// The color in a role slot.
    #[must_use]
    pub fn rgb(&self, role: Role) -> Rgb {
        let group = self.group(role.group());
        match (role.is_container(), role.is_on_color()) {
            (false, false) => group.role,
            (false, true) => group.on_role.rgb(),
            (true, false) => group.container,
            (true, true) => group.on_container.rgb(),
        }
    }

    /// Serialized value for a role slot: `#rrggbb` for role colors,
    /// `#000000` / `#FFFFFF` for on-colors.
    #[must_use]
    pub fn get(&self, role: Role) -> String {
        let group = self.group(role.group());
        match (role.is_container(), role.is_on_color()) {
            (false, false) => group.role.to_hex(),
            (false, true) => group.on_role.hex().to_owned(),
            (true, false) => group.container.to_hex(),
            (true, true) => group.on_container.hex().to_owned(),
        }
    }

    /// All twelve `(role, value)` pairs in [`Role::ALL`] order.
    #[must_use]
    pub fn entries(&self) -> [(Role, String); 12] {
        Role::ALL.map(|role| (role, self.get(role)))
    }

    /// Flat role-name → value mapping.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<&'static str, String> {
        Role::ALL
            .into_iter()
            .map(|role| (role.name(), self.get(role)))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
