#![forbid(unsafe_code)]

//! CSS custom-property export.
//!
//! Each exported role contributes a comment line and three properties
//! (`-h`, `-s`, `-l`) inside a `:root` block, preceded by an `@import` of
//! the base stylesheet the variables override. Output depends only on the
//! theme and the options, so repeated exports are byte-identical.
//!
//! ```text
//! @import "https://cdn.jsdelivr.net/npm/bulma@1.0.2/css/bulma.min.css";
//!
//! :root {
//!   /* primary */
//!   --bulma-primary-h: 171deg;
//!   --bulma-primary-s: 100%;
//!   --bulma-primary-l: 41%;
//! }
//! ```

use std::fmt::Write as _;
use std::sync::LazyLock;

use regex_lite::Regex;
use thiserror::Error;

use crate::role::Role;
use crate::theme::Theme;

/// Variable prefix used by Bulma 1.x.
pub const DEFAULT_PREFIX: &str = "bulma";

/// Base stylesheet the generated variables override.
pub const DEFAULT_BASE_IMPORT: &str = "https://cdn.jsdelivr.net/npm/bulma@1.0.2/css/bulma.min.css";

static CSS_IDENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("css ident pattern is valid"));

/// Option values that would produce malformed CSS.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("invalid prefix {value:?}: expected letters, digits, '-' or '_'")]
    InvalidPrefix { value: String },

    #[error("invalid base import {value:?}: quotes, backslashes and control characters are not allowed")]
    InvalidBaseImport { value: String },
}

/// Accept a custom-property prefix made of `[A-Za-z0-9_-]`.
pub fn validate_prefix(value: &str) -> Result<(), OptionsError> {
    if CSS_IDENT.is_match(value) {
        Ok(())
    } else {
        Err(OptionsError::InvalidPrefix {
            value: value.to_string(),
        })
    }
}

/// Accept a URL that can sit inside a double-quoted `@import` string as is.
pub fn validate_base_import(value: &str) -> Result<(), OptionsError> {
    if value.is_empty() || value.chars().any(|c| matches!(c, '"' | '\\') || c.is_control()) {
        return Err(OptionsError::InvalidBaseImport {
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Rendering options for [`Stylesheet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StylesheetOptions {
    /// Custom-property prefix, without leading dashes.
    pub prefix: String,
    /// URL of the base stylesheet in the `@import` line.
    pub base_import: String,
    /// Skip roles that still have their built-in color.
    pub custom_only: bool,
}

impl Default for StylesheetOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            base_import: DEFAULT_BASE_IMPORT.to_string(),
            custom_only: false,
        }
    }
}

impl StylesheetOptions {
    /// Set whether roles at their built-in color are skipped.
    #[must_use]
    pub fn custom_only(mut self, custom_only: bool) -> Self {
        self.custom_only = custom_only;
        self
    }

    /// Set the custom-property prefix.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Set the base stylesheet URL.
    #[must_use]
    pub fn base_import(mut self, base_import: impl Into<String>) -> Self {
        self.base_import = base_import.into();
        self
    }

    /// Check that the prefix and base import render as well-formed CSS.
    pub fn validate(&self) -> Result<(), OptionsError> {
        validate_prefix(&self.prefix)?;
        validate_base_import(&self.base_import)
    }
}

/// One custom property, e.g. `--bulma-primary-h: 171deg`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssVariable {
    pub name: String,
    pub value: String,
}

/// The three HSL custom properties for `role` under `prefix`.
#[must_use]
pub fn role_variables(theme: &Theme, role: Role, prefix: &str) -> [CssVariable; 3] {
    let hsl = theme.hsl(role);
    let name = |suffix: &str| format!("--{prefix}-{}-{suffix}", role.as_str());
    [
        CssVariable {
            name: name("h"),
            value: hsl.hue_css(),
        },
        CssVariable {
            name: name("s"),
            value: hsl.saturation_css(),
        },
        CssVariable {
            name: name("l"),
            value: hsl.lightness_css(),
        },
    ]
}

/// Stylesheet generator over a borrowed theme.
#[derive(Debug, Clone)]
pub struct Stylesheet<'a> {
    theme: &'a Theme,
    options: StylesheetOptions,
}

impl<'a> Stylesheet<'a> {
    /// Generator for `theme` under `options`.
    #[must_use]
    pub fn new(theme: &'a Theme, options: StylesheetOptions) -> Self {
        Self { theme, options }
    }

    /// Roles included under the current options, in declaration order.
    #[must_use]
    pub fn roles(&self) -> Vec<Role> {
        if self.options.custom_only {
            self.theme.custom_roles()
        } else {
            Role::ALL.to_vec()
        }
    }

    /// Every included property in output order.
    #[must_use]
    pub fn variables(&self) -> Vec<CssVariable> {
        self.roles()
            .into_iter()
            .flat_map(|role| role_variables(self.theme, role, &self.options.prefix))
            .collect()
    }

    /// Render the full stylesheet text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "@import \"{}\";", self.options.base_import);
        out.push('\n');
        out.push_str(":root {\n");
        for role in self.roles() {
            let _ = writeln!(out, "  /* {role} */");
            for var in role_variables(self.theme, role, &self.options.prefix) {
                let _ = writeln!(out, "  {}: {};", var.name, var.value);
            }
        }
        out.push_str("}\n");
        out
    }
}

/// Render `theme` with the default prefix and base import.
#[must_use]
pub fn export_stylesheet(theme: &Theme, custom_only: bool) -> String {
    Stylesheet::new(theme, StylesheetOptions::default().custom_only(custom_only)).render()
}
