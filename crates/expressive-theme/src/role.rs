//! The twelve named role slots a scheme fills.
//!
//! Each of the three role groups (primary, secondary, tertiary) has four
//! slots: the role color, its on-color, a lighter container, and the
//! container's on-color.

use std::fmt;

/// One of the three derived role groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleGroupKind {
    Primary,
    Secondary,
    Tertiary,
}

impl RoleGroupKind {
    pub const ALL: [Self; 3] = [Self::Primary, Self::Secondary, Self::Tertiary];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
        }
    }
}

/// A named semantic color slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Primary,
    OnPrimary,
    PrimaryContainer,
    OnPrimaryContainer,
    Secondary,
    OnSecondary,
    SecondaryContainer,
    OnSecondaryContainer,
    Tertiary,
    OnTertiary,
    TertiaryContainer,
    OnTertiaryContainer,
}

impl Role {
    /// All roles, grouped primary → secondary → tertiary.
    pub const ALL: [Self; 12] = [
        Self::Primary,
        Self::OnPrimary,
        Self::PrimaryContainer,
        Self::OnPrimaryContainer,
        Self::Secondary,
        Self::OnSecondary,
        Self::SecondaryContainer,
        Self::OnSecondaryContainer,
        Self::Tertiary,
        Self::OnTertiary,
        Self::TertiaryContainer,
        Self::OnTertiaryContainer,
    ];

    /// Kebab-case role name, e.g. `on-primary-container`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::OnPrimary => "on-primary",
            Self::PrimaryContainer => "primary-container",
            Self::OnPrimaryContainer => "on-primary-container",
            Self::Secondary => "secondary",
            Self::OnSecondary => "on-secondary",
            Self::SecondaryContainer => "secondary-container",
            Self::OnSecondaryContainer => "on-secondary-container",
            Self::Tertiary => "tertiary",
            Self::OnTertiary => "on-tertiary",
            Self::TertiaryContainer => "tertiary-container",
            Self::OnTertiaryContainer => "on-tertiary-container",
        }
    }

    /// Look up a role by its kebab-case name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.name() == name)
    }

    /// Custom property name, e.g. `--on-primary`.
    #[must_use]
    pub fn css_var(self) -> String {
        format!("--{}", self.name())
    }

    #[must_use]
    pub const fn group(self) -> RoleGroupKind {
        match self {
            Self::Primary | Self::OnPrimary | Self::PrimaryContainer | Self::OnPrimaryContainer => {
                RoleGroupKind::Primary
            }
            Self::Secondary
            | Self::OnSecondary
            | Self::SecondaryContainer
            | Self::OnSecondaryContainer => RoleGroupKind::Secondary,
            Self::Tertiary
            | Self::OnTertiary
            | Self::TertiaryContainer
            | Self::OnTertiaryContainer => RoleGroupKind::Tertiary,
        }
    }

    /// Whether this slot holds a black/white on-color.
    #[must_use]
    pub const fn is_on_color(self) -> bool {
        matches!(
            self,
            Self::OnPrimary
                | Self::OnPrimaryContainer
                | Self::OnSecondary
                | Self::OnSecondaryContainer
                | Self::OnTertiary
                | Self::OnTertiaryContainer
        )
    }

    /// Whether this slot is a container or a container's on-color.
    #[must_use]
    pub const fn is_container(self) -> bool {
        matches!(
            self,
            Self::PrimaryContainer
                | Self::OnPrimaryContainer
                | Self::SecondaryContainer
                | Self::OnSecondaryContainer
                | Self::TertiaryContainer
                | Self::OnTertiaryContainer
        )
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = Role::ALL.iter().map(|r| r.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn name_roundtrip() {
        for role in Role::ALL {
            assert_eq!(Role::from_name(role.name()), Some(role));
        }
        assert_eq!(Role::from_name("quaternary"), None);
    }

    #[test]
    fn css_var_has_prefix() {
        assert_eq!(Role::OnPrimaryContainer.css_var(), "--on-primary-container");
    }

    #[test]
    fn four_roles_per_group() {
        for kind in RoleGroupKind::ALL {
            let count = Role::ALL.iter().filter(|r| r.group() == kind).count();
            assert_eq!(count, 4, "{} has {count} roles", kind.name());
        }
    }

    #[test]
    fn group_name_prefixes_role_name() {
        for role in Role::ALL {
            assert!(role.name().contains(role.group().name()), "{role}");
        }
    }

    #[test]
    fn on_color_slots() {
        let on: Vec<_> = Role::ALL.into_iter().filter(|r| r.is_on_color()).collect();
        assert_eq!(on.len(), 6);
        assert!(on.iter().all(|r| r.name().starts_with("on-")));
    }

    #[test]
    fn container_slots() {
        let containers = Role::ALL.into_iter().filter(|r| r.is_container()).count();
        assert_eq!(containers, 6);
        assert!(!Role::Primary.is_container());
        assert!(Role::OnTertiaryContainer.is_container());
    }
}
