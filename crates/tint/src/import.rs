use std::path::PathBuf;

use clap::Args;
use tint_style::import_theme;

use crate::config::TintConfig;
use crate::error::Result;
use crate::util::{OutputIntegration, emit, output_for, read_input};

#[derive(Debug, Clone, Args)]
pub struct ImportArgs {
    /// JSON theme file to validate (`-` for stdin).
    pub file: PathBuf,

    /// Print only roles that differ from the defaults.
    #[arg(long = "custom-only")]
    pub custom_only: bool,

    /// Write the normalised theme to a file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Validate the payload and return the theme as JSON.
pub fn render_import(args: &ImportArgs, config: &TintConfig) -> Result<String> {
    let payload = read_input(&args.file)?;
    let theme = import_theme(&payload)?;
    Ok(theme.to_json(args.custom_only || config.custom_only)?)
}

pub fn run_import(args: ImportArgs, config: &TintConfig) -> Result<()> {
    let ui = output_for(&OutputIntegration::detect());
    ui.rule(Some("tint import"));
    ui.info(&format!("source={}", args.file.display()));

    let json = render_import(&args, config)?;
    emit(args.output.as_deref(), &json)?;
    ui.success("theme is valid");
    Ok(())
}
