use clap::Args;
use serde::Serialize;
use tint_style::HexColor;

use crate::error::Result;

#[derive(Debug, Clone, Args)]
pub struct HslArgs {
    /// One or more `#RRGGBB` colors.
    #[arg(required = true)]
    pub colors: Vec<String>,

    /// Print a JSON array instead of one line per color.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HslRow {
    pub color: HexColor,
    pub h: u16,
    pub s: f64,
    pub l: f64,
}

pub fn convert_all(colors: &[String]) -> Result<Vec<HslRow>> {
    colors
        .iter()
        .map(|raw| -> Result<HslRow> {
            let color: HexColor = raw.parse()?;
            let hsl = color.to_hsl();
            Ok(HslRow {
                color,
                h: hsl.h,
                s: hsl.s,
                l: hsl.l,
            })
        })
        .collect()
}

pub fn render_hsl(args: &HslArgs) -> Result<String> {
    let rows = convert_all(&args.colors)?;
    if args.json {
        return Ok(serde_json::to_string_pretty(&rows)?);
    }
    Ok(rows
        .iter()
        .map(|row| format!("{} {}deg {}% {}%", row.color, row.h, row.s, row.l))
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn run_hsl(args: HslArgs) -> Result<()> {
    println!("{}", render_hsl(&args)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::error::{EXIT_INVALID_INPUT, TintError};

    use super::{HslArgs, render_hsl};

    fn args(colors: &[&str], json: bool) -> HslArgs {
        HslArgs {
            colors: colors.iter().map(|c| (*c).to_string()).collect(),
            json,
        }
    }

    #[test]
    fn text_output_one_line_per_color() {
        let text = render_hsl(&args(&["#FF0000", "#3273dc"], false)).expect("hsl");
        assert_eq!(text, "#ff0000 0deg 100% 50%\n#3273dc 217deg 70.8% 52.9%");
    }

    #[test]
    fn json_output_lists_rows() {
        let json = render_hsl(&args(&["#00ff00"], true)).expect("hsl");
        let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
        assert_eq!(value[0]["color"], "#00ff00");
        assert_eq!(value[0]["h"], 120);
        assert_eq!(value[0]["s"], 100.0);
    }

    #[test]
    fn invalid_color_is_invalid_input() {
        let error = render_hsl(&args(&["#00ff00", "green"], false)).expect_err("bad color");
        assert!(matches!(error, TintError::Color(_)));
        assert_eq!(error.exit_code(), EXIT_INVALID_INPUT);
    }
}
