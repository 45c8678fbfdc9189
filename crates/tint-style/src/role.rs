#![forbid(unsafe_code)]

//! The fixed set of Bulma color roles.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::color::HexColor;

/// A role name outside the fixed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role {name:?}")]
pub struct RoleError {
    /// The rejected name.
    pub name: String,
}

/// A named color slot customised by the generated stylesheet.
///
/// Declaration order is the output order of every export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Primary,
    Link,
    Info,
    Success,
    Warning,
    Danger,
    Light,
    Dark,
    Black,
    White,
}

impl Role {
    /// Number of roles.
    pub const COUNT: usize = 10;

    /// Every role in declaration order.
    pub const ALL: [Role; Self::COUNT] = [
        Self::Primary,
        Self::Link,
        Self::Info,
        Self::Success,
        Self::Warning,
        Self::Danger,
        Self::Light,
        Self::Dark,
        Self::Black,
        Self::White,
    ];

    /// The wire name, as used in JSON keys and CSS variable names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Link => "link",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Black => "black",
            Self::White => "white",
        }
    }

    /// Position in [`Role::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Built-in Bulma color for this role.
    #[must_use]
    pub const fn default_color(self) -> HexColor {
        match self {
            Self::Primary => HexColor::rgb(0x00, 0xd1, 0xb2),
            Self::Link => HexColor::rgb(0x32, 0x73, 0xdc),
            Self::Info => HexColor::rgb(0x20, 0x9c, 0xee),
            Self::Success => HexColor::rgb(0x23, 0xd1, 0x60),
            Self::Warning => HexColor::rgb(0xff, 0xdd, 0x57),
            Self::Danger => HexColor::rgb(0xff, 0x38, 0x60),
            Self::Light => HexColor::rgb(0xf5, 0xf5, 0xf5),
            Self::Dark => HexColor::rgb(0x36, 0x36, 0x36),
            Self::Black => HexColor::rgb(0x00, 0x00, 0x00),
            Self::White => HexColor::rgb(0xff, 0xff, 0xff),
        }
    }

    /// Bulma modifier class, e.g. `is-primary`.
    #[must_use]
    pub fn class_name(self) -> String {
        format!("is-{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| RoleError {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
