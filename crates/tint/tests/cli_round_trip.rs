use clap::Parser;
use tempfile::tempdir;
use tint::cli::Cli;
use tint::error::{EXIT_INVALID_INPUT, TintError};
use tint_style::{ImportError, Role, import_theme};

fn run_args(args: &[&str]) -> tint::Result<()> {
    let cli = Cli::try_parse_from(args.iter().copied()).expect("arguments parse");
    tint::run(cli)
}

#[test]
fn import_then_export_custom_only() {
    let dir = tempdir().expect("tempdir");
    let theme_path = dir.path().join("theme.json");
    let normalized = dir.path().join("normalized.json");
    let css_path = dir.path().join("out/theme.css");
    std::fs::write(&theme_path, r##"{"primary":"#FF0000","link":"#3273dc"}"##).expect("write");

    run_args(&[
        "tint",
        "import",
        theme_path.to_str().expect("utf8"),
        "--output",
        normalized.to_str().expect("utf8"),
    ])
    .expect("import");

    let full = std::fs::read_to_string(&normalized).expect("read normalized");
    let theme = import_theme(&full).expect("normalized json re-imports");
    assert_eq!(theme.custom_roles(), vec![Role::Primary]);

    run_args(&[
        "tint",
        "export",
        "--theme",
        normalized.to_str().expect("utf8"),
        "--set",
        "white=#fefefe",
        "--custom-only",
        "--output",
        css_path.to_str().expect("utf8"),
    ])
    .expect("export");

    let css = std::fs::read_to_string(&css_path).expect("read css");
    let expected = "\
@import \"https://cdn.jsdelivr.net/npm/bulma@1.0.2/css/bulma.min.css\";

:root {
  /* primary */
  --bulma-primary-h: 0deg;
  --bulma-primary-s: 100%;
  --bulma-primary-l: 50%;
  /* white */
  --bulma-white-h: 0deg;
  --bulma-white-s: 0%;
  --bulma-white-l: 99.6%;
}
";
    assert_eq!(css, expected);
}

#[test]
fn config_file_sets_prefix_and_mode() {
    let dir = tempdir().expect("tempdir");
    let config = dir.path().join("tint.env");
    let html = dir.path().join("preview.html");
    let css = dir.path().join("theme.css");
    std::fs::write(&config, "prefix=brand\nmode=light\n").expect("write config");

    run_args(&[
        "tint",
        "--config",
        config.to_str().expect("utf8"),
        "preview",
        "--output",
        html.to_str().expect("utf8"),
    ])
    .expect("preview");
    let page = std::fs::read_to_string(&html).expect("read html");
    assert!(page.contains("data-theme=\"light\""));
    assert!(page.contains("--brand-primary-h: 171deg"));

    run_args(&[
        "tint",
        "export",
        "--config",
        config.to_str().expect("utf8"),
        "--output",
        css.to_str().expect("utf8"),
    ])
    .expect("export");
    let sheet = std::fs::read_to_string(&css).expect("read css");
    assert!(sheet.contains("  --brand-link-s: 70.8%;\n"));
}

#[test]
fn invalid_theme_file_reports_invalid_color() {
    let dir = tempdir().expect("tempdir");
    let theme_path = dir.path().join("theme.json");
    std::fs::write(&theme_path, r#"{"primary":"not-a-color"}"#).expect("write");

    let error = run_args(&["tint", "import", theme_path.to_str().expect("utf8")])
        .expect_err("invalid color");
    assert_eq!(error.exit_code(), EXIT_INVALID_INPUT);
    match error {
        TintError::Import(ImportError::InvalidColor { role, .. }) => assert_eq!(role, "primary"),
        other => panic!("expected InvalidColor, got {other}"),
    }
}
