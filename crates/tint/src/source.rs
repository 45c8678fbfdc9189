use std::path::PathBuf;

use clap::Args;
use tint_style::{HexColor, Role, Theme};
use tracing::debug;

use crate::error::{Result, TintError};
use crate::util::read_input;

/// Where the working theme comes from: a JSON file plus inline edits.
#[derive(Debug, Clone, Default, Args)]
pub struct ThemeSourceArgs {
    /// JSON theme to start from (`-` for stdin). Defaults to the built-in theme.
    #[arg(long)]
    pub theme: Option<PathBuf>,

    /// Override one role, e.g. `--set primary=#ff0000`. Repeatable.
    #[arg(long = "set", value_name = "ROLE=COLOR")]
    pub set: Vec<String>,
}

impl ThemeSourceArgs {
    pub fn load(&self) -> Result<Theme> {
        let mut theme = match &self.theme {
            Some(path) => Theme::default().merge_json(&read_input(path)?)?,
            None => Theme::default(),
        };
        for assignment in &self.set {
            let (role, color) = parse_assignment(assignment)?;
            theme = theme.with_color(role, color);
        }
        debug!(custom = theme.custom_roles().len(), "theme loaded");
        Ok(theme)
    }
}

/// Parse `ROLE=COLOR`.
pub fn parse_assignment(raw: &str) -> Result<(Role, HexColor)> {
    let Some((role, color)) = raw.split_once('=') else {
        return Err(TintError::invalid(format!(
            "expected ROLE=COLOR, got {raw:?}"
        )));
    };
    Ok((role.trim().parse()?, color.trim().parse()?))
}
