use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tint_style::Role;

use crate::config::TintConfig;
use crate::error::Result;
use crate::export::{ExportArgs, run_export};
use crate::hsl::{HslArgs, run_hsl};
use crate::import::{ImportArgs, run_import};
use crate::logging::{self, LOG_FORMAT_ENV, LogFormat};
use crate::preview::{PreviewArgs, run_preview};

#[derive(Debug, Parser)]
#[command(
    name = "tint",
    about = "Bulma theme color editor: HSL conversion, stylesheet export, and JSON import",
    version
)]
pub struct Cli {
    /// Env-style config file (also `TINT_CONFIG`).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr.
    #[arg(long = "log-json", global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the role names with their default colors.
    Roles,

    /// Convert `#RRGGBB` colors to HSL.
    Hsl(HslArgs),

    /// Generate the CSS custom-property stylesheet.
    Export(ExportArgs),

    /// Validate a JSON theme and print it in full.
    Import(ImportArgs),

    /// Render an HTML preview page.
    Preview(PreviewArgs),
}

pub fn run_from_env() -> Result<()> {
    let cli = Cli::parse();
    let env_format = std::env::var(LOG_FORMAT_ENV).ok();
    logging::init(LogFormat::resolve(cli.log_json, env_format.as_deref()));
    run(cli)
}

pub fn run(cli: Cli) -> Result<()> {
    let config = TintConfig::load(cli.config.as_deref())?;
    match cli.command {
        Commands::Roles => {
            println!("{}", render_roles());
            Ok(())
        }
        Commands::Hsl(args) => run_hsl(args),
        Commands::Export(args) => run_export(args, &config),
        Commands::Import(args) => run_import(args, &config),
        Commands::Preview(args) => run_preview(args, &config),
    }
}

#[must_use]
pub fn render_roles() -> String {
    Role::ALL
        .iter()
        .map(|role| format!("{:<8} {}", role.as_str(), role.default_color()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use crate::error::TintError;
    use crate::import::ImportArgs;

    use super::{Cli, Commands, render_roles, run};

    #[test]
    fn roles_listing_is_in_declaration_order() {
        let listing = render_roles();
        let first = listing.lines().next().expect("first line");
        let last = listing.lines().last().expect("last line");
        assert_eq!(first, "primary  #00d1b2");
        assert_eq!(last, "white    #ffffff");
        assert_eq!(listing.lines().count(), 10);
    }

    #[test]
    fn parses_export_with_repeated_set() {
        let cli = Cli::try_parse_from([
            "tint",
            "export",
            "--custom-only",
            "--set",
            "primary=#ff0000",
            "--set",
            "link=#00ff00",
        ])
        .expect("parse");
        match cli.command {
            Commands::Export(args) => {
                assert!(args.custom_only);
                assert_eq!(args.source.set.len(), 2);
            }
            other => panic!("expected export, got {other:?}"),
        }
    }

    #[test]
    fn parses_preview_mode_and_global_flags() {
        let cli = Cli::try_parse_from(["tint", "preview", "--mode", "light", "--log-json"])
            .expect("parse");
        assert!(cli.log_json);
        match cli.command {
            Commands::Preview(args) => assert_eq!(args.mode, Some(tint_style::Mode::Light)),
            other => panic!("expected preview, got {other:?}"),
        }
        assert!(Cli::try_parse_from(["tint", "preview", "--mode", "sepia"]).is_err());
    }

    #[test]
    fn roles_command_dispatches_successfully() {
        let result = run(Cli {
            config: None,
            log_json: false,
            command: Commands::Roles,
        });
        assert!(result.is_ok());
    }

    #[test]
    fn missing_config_file_fails_before_dispatch() {
        let result = run(Cli {
            config: Some(PathBuf::from("/tmp/tint/does-not-exist.env")),
            log_json: false,
            command: Commands::Roles,
        });
        match result.expect_err("missing config should fail") {
            TintError::MissingPath { path } => {
                assert_eq!(path, PathBuf::from("/tmp/tint/does-not-exist.env"));
            }
            other => panic!("expected MissingPath, got {other}"),
        }
    }

    #[test]
    fn import_command_dispatches_missing_path_error() {
        let result = run(Cli {
            config: None,
            log_json: false,
            command: Commands::Import(ImportArgs {
                file: PathBuf::from("/tmp/tint/no-theme.json"),
                custom_only: false,
                output: None,
            }),
        });
        assert!(matches!(result, Err(TintError::MissingPath { .. })));
    }
}
