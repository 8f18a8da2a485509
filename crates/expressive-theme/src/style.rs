//! Projection of derived tokens onto a styling surface.
//!
//! Derivation never touches a rendering surface directly. Instead, every
//! token is pushed through [`StyleTarget::set_property`], so the same scheme
//! can land in a stylesheet, a map under test, or anything else that stores
//! named properties. Writes are last-write-wins; there is no locking.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use tracing::debug;

use crate::role::Role;
use crate::scheme::Scheme;
use crate::shape::ShapeScale;
use crate::typography::TypeAxes;

/// Anything that accepts named style properties.
pub trait StyleTarget {
    /// Set `name` (including the leading `--`) to `value`, replacing any
    /// previous value.
    fn set_property(&mut self, name: &str, value: &str);
}

impl StyleTarget for BTreeMap<String, String> {
    fn set_property(&mut self, name: &str, value: &str) {
        self.insert(name.to_owned(), value.to_owned());
    }
}

/// Push all twelve role colors onto `target`.
pub fn apply_scheme<T: StyleTarget + ?Sized>(target: &mut T, scheme: &Scheme) {
    for (role, value) in scheme.entries() {
        target.set_property(&role.css_var(), &value);
    }
    debug!(source = %scheme.source, "applied color scheme");
}

pub fn apply_shape<T: StyleTarget + ?Sized>(target: &mut T, shape: &ShapeScale) {
    for (name, value) in shape.declarations() {
        target.set_property(name, &value);
    }
    debug!(large = shape.large, "applied shape scale");
}

pub fn apply_type_axes<T: StyleTarget + ?Sized>(target: &mut T, axes: &TypeAxes) {
    for (name, value) in axes.declarations() {
        target.set_property(name, &value);
    }
    debug!(weight = axes.weight, width = axes.width, "applied type axes");
}

// ---------------------------------------------------------------------------
// StyleSheet
// ---------------------------------------------------------------------------

/// An ordered set of custom properties plus an optional root class.
///
/// Properties keep the position of their first write; later writes to the
/// same name replace the value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    properties: Vec<(String, String)>,
    root_class: Option<String>,
}

impl StyleSheet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            properties: Vec::new(),
            root_class: None,
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Value of a role's custom property.
    #[must_use]
    pub fn role(&self, role: Role) -> Option<&str> {
        self.get(&role.css_var())
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn root_class(&self) -> Option<&str> {
        self.root_class.as_deref()
    }

    pub fn set_root_class(&mut self, class: Option<&str>) {
        self.root_class = class.map(str::to_owned);
    }

    /// Render as a CSS rule. When a root class is set the selector is
    /// qualified with it, e.g. `:root.dark-theme`.
    #[must_use]
    pub fn to_css(&self, selector: &str) -> String {
        let mut out = String::new();
        match &self.root_class {
            Some(class) => {
                let _ = writeln!(out, "{selector}.{class} {{");
            }
            None => {
                let _ = writeln!(out, "{selector} {{");
            }
        }
        for (name, value) in &self.properties {
            let _ = writeln!(out, "  {name}: {value};");
        }
        out.push_str("}\n");
        out
    }
}

impl StyleTarget for StyleSheet {
    fn set_property(&mut self, name: &str, value: &str) {
        if let Some(slot) = self.properties.iter_mut().find(|(n, _)| n == name) {
            value.clone_into(&mut slot.1);
        } else {
            self.properties.push((name.to_owned(), value.to_owned()));
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
