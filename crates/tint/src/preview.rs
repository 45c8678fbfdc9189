use std::path::PathBuf;

use clap::Args;
use tint_style::{Mode, Theme, render_preview};

use crate::config::TintConfig;
use crate::error::Result;
use crate::source::ThemeSourceArgs;
use crate::util::{OutputIntegration, emit, output_for};

#[derive(Debug, Clone, Default, Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub source: ThemeSourceArgs,

    /// Page color scheme: `light` or `dark`.
    #[arg(long)]
    pub mode: Option<Mode>,

    /// Write the HTML page to a file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[must_use]
pub fn render(theme: &Theme, args: &PreviewArgs, config: &TintConfig) -> String {
    let mode = args.mode.unwrap_or(config.mode);
    render_preview(theme, mode, &config.stylesheet_options())
}

pub fn run_preview(args: PreviewArgs, config: &TintConfig) -> Result<()> {
    let ui = output_for(&OutputIntegration::detect());
    let theme = args.source.load()?;
    let html = render(&theme, &args, config);

    ui.rule(Some("tint preview"));
    emit(args.output.as_deref(), &html)?;
    if let Some(path) = &args.output {
        ui.success(&format!("preview written to {}", path.display()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use tint_style::{Mode, Theme};

    use crate::config::TintConfig;

    use super::{PreviewArgs, render, run_preview};

    #[test]
    fn flag_mode_overrides_config_mode() {
        let config = TintConfig {
            mode: Mode::Dark,
            ..TintConfig::default()
        };
        let args = PreviewArgs {
            mode: Some(Mode::Light),
            ..PreviewArgs::default()
        };
        let html = render(&Theme::default(), &args, &config);
        assert!(html.contains("data-theme=\"light\""));

        let html = render(&Theme::default(), &PreviewArgs::default(), &config);
        assert!(html.contains("data-theme=\"dark\""));
    }

    #[test]
    fn run_preview_writes_html() {
        let dir = tempfile::tempdir().expect("tempdir");
        let output = dir.path().join("preview.html");
        let mut args = PreviewArgs {
            output: Some(output.clone()),
            ..PreviewArgs::default()
        };
        args.source.set.push("success=#00ff00".to_string());

        run_preview(args, &TintConfig::default()).expect("preview");
        let html = std::fs::read_to_string(output).expect("read");
        assert!(html.starts_with("<!doctype html>"));
        assert!(html.contains("title=\"success: #00ff00\""));
    }
}
