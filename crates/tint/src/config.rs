//! Layered configuration: built-in defaults, an optional env-style file,
//! `TINT_*` environment variables, then command-line flags.
//!
//! The file format is one `key=value` per line; blank lines and lines
//! starting with `#` are ignored and values may be double-quoted.
//!
//! ```text
//! # tint.env
//! prefix=bulma
//! base_import="https://cdn.jsdelivr.net/npm/bulma@1.0.2/css/bulma.min.css"
//! mode=light
//! custom_only=yes
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tint_style::{
    DEFAULT_BASE_IMPORT, DEFAULT_PREFIX, Mode, StylesheetOptions, validate_base_import,
    validate_prefix,
};
use tracing::debug;

use crate::error::{Result, TintError};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "TINT_CONFIG";

const ENV_KEYS: [(&str, &str); 4] = [
    ("TINT_PREFIX", "prefix"),
    ("TINT_BASE_IMPORT", "base_import"),
    ("TINT_MODE", "mode"),
    ("TINT_CUSTOM_ONLY", "custom_only"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TintConfig {
    pub prefix: String,
    pub base_import: String,
    pub mode: Mode,
    pub custom_only: bool,
}

impl Default for TintConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            base_import: DEFAULT_BASE_IMPORT.to_string(),
            mode: Mode::default(),
            custom_only: false,
        }
    }
}

impl TintConfig {
    /// Resolve from `path` (or `TINT_CONFIG`) and the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let env_path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let lookup = |key: &str| std::env::var(key).ok();
        Self::resolve(path.or(env_path.as_deref()), lookup)
    }

    /// Resolve with an explicit environment lookup.
    pub fn resolve(path: Option<&Path>, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = path {
            if !path.exists() {
                return Err(TintError::MissingPath {
                    path: path.to_path_buf(),
                });
            }
            let content = fs::read_to_string(path)?;
            let values = parse_config_content(&content);
            config
                .apply(&values)
                .map_err(|message| TintError::Config {
                    path: path.to_path_buf(),
                    message,
                })?;
            debug!(path = %path.display(), keys = values.len(), "config file loaded");
        }

        let env_values: BTreeMap<String, String> = ENV_KEYS
            .iter()
            .filter_map(|(var, key)| env(*var).map(|value| ((*key).to_string(), value)))
            .collect();
        config.apply(&env_values).map_err(TintError::invalid)?;

        Ok(config)
    }

    fn apply(&mut self, values: &BTreeMap<String, String>) -> std::result::Result<(), String> {
        for (key, value) in values {
            match key.as_str() {
                "prefix" => {
                    validate_prefix(value).map_err(|err| err.to_string())?;
                    self.prefix = value.clone();
                }
                "base_import" => {
                    validate_base_import(value).map_err(|err| err.to_string())?;
                    self.base_import = value.clone();
                }
                "mode" => self.mode = value.parse::<Mode>().map_err(|err| err.to_string())?,
                "custom_only" => {
                    self.custom_only = parse_bool(value)
                        .ok_or_else(|| format!("custom_only: invalid boolean {value:?}"))?;
                }
                other => return Err(format!("unknown key {other:?}")),
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn stylesheet_options(&self) -> StylesheetOptions {
        StylesheetOptions::default()
            .prefix(self.prefix.clone())
            .base_import(self.base_import.clone())
            .custom_only(self.custom_only)
    }
}

#[must_use]
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[must_use]
pub fn parse_config_content(content: &str) -> BTreeMap<String, String> {
    let mut values = BTreeMap::new();

    for raw_line in content.lines() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value_raw)) = line.split_once('=') else {
            continue;
        };

        let key = key.trim().to_string();
        let mut value = value_raw.trim().to_string();

        if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
            value = value[1..value.len() - 1].to_string();
        }

        values.insert(key, value);
    }

    values
}
