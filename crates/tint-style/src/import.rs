#![forbid(unsafe_code)]

//! JSON theme import and export.
//!
//! The import payload is a JSON object whose keys are role names and whose
//! values are `#RRGGBB` strings. Partial objects are accepted: roles that
//! are not mentioned keep the value of the theme being merged into.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::color::{HexColor, is_hex_color};
use crate::role::Role;
use crate::theme::Theme;

/// Why an import payload was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    /// Payload is not valid JSON or is not a JSON object.
    #[error("invalid theme format: {message}")]
    InvalidFormat { message: String },

    /// A key does not name a role.
    #[error("unknown role {role:?}")]
    UnknownRole { role: String },

    /// A value is not a `#RRGGBB` string.
    #[error("invalid color for {role:?}: {value}, expected #RRGGBB")]
    InvalidColor { role: String, value: String },
}

/// Parse `json` into a full theme seeded from the built-in defaults.
pub fn import_theme(json: &str) -> Result<Theme, ImportError> {
    Theme::default().merge_json(json)
}

fn parse_object(json: &str) -> Result<Map<String, Value>, ImportError> {
    match serde_json::from_str::<Value>(json) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(ImportError::InvalidFormat {
            message: format!("expected a JSON object, found {}", json_kind(&other)),
        }),
        Err(err) => Err(ImportError::InvalidFormat {
            message: err.to_string(),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn parse_entry(key: &str, value: &Value) -> Result<(Role, HexColor), ImportError> {
    let role: Role = key.parse().map_err(|_| ImportError::UnknownRole {
        role: key.to_string(),
    })?;
    let invalid = || ImportError::InvalidColor {
        role: key.to_string(),
        value: value.to_string(),
    };
    let Value::String(text) = value else {
        return Err(invalid());
    };
    if !is_hex_color(text) {
        return Err(invalid());
    }
    let color = text.parse().map_err(|_| invalid())?;
    Ok((role, color))
}

impl Theme {
    /// Apply a JSON payload on top of this theme.
    ///
    /// Every entry is validated before any is applied, so on error `self`
    /// is the only theme and it is unchanged.
    pub fn merge_json(&self, json: &str) -> Result<Theme, ImportError> {
        let entries = parse_object(json)
            .and_then(|map| {
                map.iter()
                    .map(|(key, value)| parse_entry(key, value))
                    .collect::<Result<Vec<_>, _>>()
            })
            .inspect_err(|err| warn!(error = %err, "theme import rejected"))?;

        let mut next = self.clone();
        for (role, color) in &entries {
            next = next.with_color(*role, *color);
        }
        debug!(roles = entries.len(), "theme imported");
        Ok(next)
    }

    /// Pretty JSON object in declaration order, accepted by [`import_theme`].
    ///
    /// With `custom_only`, roles at their built-in color are left out.
    pub fn to_json(&self, custom_only: bool) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&RoleColors {
            theme: self,
            custom_only,
        })
    }
}

/// Role/color map view of a theme, optionally without default roles.
struct RoleColors<'a> {
    theme: &'a Theme,
    custom_only: bool,
}

impl Serialize for RoleColors<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries: Vec<(Role, HexColor)> = self
            .theme
            .iter()
            .filter(|(role, _)| !self.custom_only || !self.theme.is_default(*role))
            .collect();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (role, color) in &entries {
            map.serialize_entry(role.as_str(), color)?;
        }
        map.end()
    }
}
