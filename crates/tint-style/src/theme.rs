#![forbid(unsafe_code)]

//! Theme state: one color per [`Role`].
//!
//! A [`Theme`] always holds exactly one color for every role. Edits never
//! mutate a theme in place; [`Theme::with_color`] and [`Theme::reset`]
//! return a new value and leave the original untouched.
//!
//! # Example
//! ```
//! use tint_style::{Role, Theme};
//!
//! let base = Theme::default();
//! let edited = base.with_color(Role::Primary, "#123456".parse().unwrap());
//!
//! assert!(base.is_default(Role::Primary));
//! assert!(!edited.is_default(Role::Primary));
//! assert_eq!(edited.custom_roles(), vec![Role::Primary]);
//! ```

use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;
use tracing::debug;

use crate::color::{ColorError, HexColor, Hsl};
use crate::role::{Role, RoleError};

/// Errors from string-keyed edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error(transparent)]
    Role(#[from] RoleError),
    #[error(transparent)]
    Color(#[from] ColorError),
}

/// Complete assignment of colors to roles.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Theme {
    colors: [HexColor; Role::COUNT],
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            colors: Role::ALL.map(Role::default_color),
        }
    }
}

/// The built-in Bulma theme.
#[must_use]
pub fn default_theme() -> Theme {
    Theme::default()
}

impl Theme {
    /// Current color for `role`.
    #[must_use]
    pub const fn get(&self, role: Role) -> HexColor {
        self.colors[role.index()]
    }

    /// HSL triple for `role`'s current color.
    #[must_use]
    pub fn hsl(&self, role: Role) -> Hsl {
        self.get(role).to_hsl()
    }

    /// Copy of this theme with `role` set to `color`.
    #[must_use]
    pub fn with_color(&self, role: Role, color: HexColor) -> Self {
        let mut next = self.clone();
        next.colors[role.index()] = color;
        debug!(role = role.as_str(), color = %color, "theme color updated");
        next
    }

    /// Copy of this theme with a role and color given by name.
    pub fn set_color_named(&self, role: &str, color: &str) -> Result<Self, EditError> {
        let role: Role = role.parse()?;
        let color: HexColor = color.parse()?;
        Ok(self.with_color(role, color))
    }

    /// Copy of this theme with `role` back at its built-in color.
    #[must_use]
    pub fn reset(&self, role: Role) -> Self {
        self.with_color(role, role.default_color())
    }

    /// `true` when `role` still has its built-in color.
    #[must_use]
    pub fn is_default(&self, role: Role) -> bool {
        self.get(role) == role.default_color()
    }

    /// `true` when every role has its built-in color.
    #[must_use]
    pub fn is_all_default(&self) -> bool {
        Role::ALL.into_iter().all(|role| self.is_default(role))
    }

    /// Roles whose color differs from the built-in one, in declaration order.
    #[must_use]
    pub fn custom_roles(&self) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|role| !self.is_default(*role))
            .collect()
    }

    /// Role/color pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Role, HexColor)> + '_ {
        Role::ALL.into_iter().map(|role| (role, self.get(role)))
    }
}

/// Serializes as a JSON-style map in declaration order.
impl Serialize for Theme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Role::COUNT))?;
        for (role, color) in self.iter() {
            map.serialize_entry(role.as_str(), &color)?;
        }
        map.end()
    }
}
