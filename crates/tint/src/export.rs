use std::path::PathBuf;

use clap::Args;
use tint_style::{Stylesheet, Theme};

use crate::config::TintConfig;
use crate::error::{Result, TintError};
use crate::source::ThemeSourceArgs;
use crate::util::{OutputIntegration, emit, output_for};

#[derive(Debug, Clone, Default, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub source: ThemeSourceArgs,

    /// Only emit roles whose color differs from the Bulma default.
    #[arg(long = "custom-only")]
    pub custom_only: bool,

    /// Custom-property prefix (default `bulma`).
    #[arg(long)]
    pub prefix: Option<String>,

    /// Base stylesheet URL for the `@import` line.
    #[arg(long = "base-import")]
    pub base_import: Option<String>,

    /// Write to a file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub fn render_export(theme: &Theme, args: &ExportArgs, config: &TintConfig) -> Result<String> {
    let mut options = config.stylesheet_options();
    if args.custom_only {
        options.custom_only = true;
    }
    if let Some(prefix) = &args.prefix {
        options.prefix.clone_from(prefix);
    }
    if let Some(base_import) = &args.base_import {
        options.base_import.clone_from(base_import);
    }
    options
        .validate()
        .map_err(|err| TintError::invalid(err.to_string()))?;
    Ok(Stylesheet::new(theme, options).render())
}

pub fn run_export(args: ExportArgs, config: &TintConfig) -> Result<()> {
    let ui = output_for(&OutputIntegration::detect());
    let theme = args.source.load()?;
    let css = render_export(&theme, &args, config)?;

    ui.rule(Some("tint export"));
    ui.info(&format!(
        "custom roles: {}",
        theme.custom_roles().len()
    ));
    emit(args.output.as_deref(), &css)?;
    if let Some(path) = &args.output {
        ui.success(&format!("stylesheet written to {}", path.display()));
    }
    Ok(())
}
