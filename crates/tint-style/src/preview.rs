#![forbid(unsafe_code)]

//! Standalone HTML preview of a theme on Bulma sample buttons.
//!
//! The sample area carries the generated custom properties as an inline
//! style, so the page shows the theme without a separate stylesheet.

use crate::mode::Mode;
use crate::role::Role;
use crate::stylesheet::{Stylesheet, StylesheetOptions};
use crate::theme::Theme;

fn html_escape(value: &str) -> String {
    v_htmlescape::escape(value).to_string()
}

/// Inline `style` value carrying every role's HSL properties.
#[must_use]
pub fn inline_style(theme: &Theme, options: &StylesheetOptions) -> String {
    let all = options.clone().custom_only(false);
    Stylesheet::new(theme, all)
        .variables()
        .iter()
        .map(|var| format!("{}: {}", var.name, var.value))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Render the preview page for `theme` in `mode`.
#[must_use]
pub fn render_preview(theme: &Theme, mode: Mode, options: &StylesheetOptions) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        "<!doctype html>\n<html lang=\"en\" data-theme=\"{}\">\n<head>\n  <meta charset=\"utf-8\">\n  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        mode.as_str()
    ));
    html.push_str("  <title>Bulma theme preview</title>\n");
    html.push_str(&format!(
        "  <link rel=\"stylesheet\" href=\"{}\">\n",
        html_escape(&options.base_import)
    ));
    html.push_str(
        "  <style>\n    .typegrid { display: grid; grid-template-columns: repeat(10, 1fr); gap: 8px; }\n    .sample { display: grid; grid-template-columns: repeat(10, 1fr); gap: 8px; margin-top: 16px; }\n    .swatch { display: inline-block; width: 1em; height: 1em; border: 1px solid #888; vertical-align: middle; }\n  </style>\n</head>\n<body>\n",
    );

    html.push_str("<div class=\"section is-small\">\n<div class=\"block container\">\n");
    html.push_str("<h1 class=\"title\">Bulma theme preview</h1>\n");
    html.push_str(&format!(
        "<p class=\"subtitle\">{} custom role(s), mode {}</p>\n",
        theme.custom_roles().len(),
        mode.as_str()
    ));
    html.push_str("</div>\n");

    html.push_str("<div class=\"block container typegrid\">\n");
    for (role, color) in theme.iter() {
        let hsl = color.to_hsl();
        let state = if theme.is_default(role) {
            "default"
        } else {
            "custom"
        };
        html.push_str(&format!(
            "<div class=\"role {state}\"><strong>{}</strong><br><span class=\"swatch\" style=\"background: {color}\"></span> {color}<br>{}<br><em>{state}</em></div>\n",
            html_escape(&role.class_name()),
            html_escape(&hsl.to_string()),
        ));
    }
    html.push_str("</div>\n");

    html.push_str(&format!(
        "<div class=\"block container sample\" style=\"{}\">\n",
        html_escape(&inline_style(theme, options))
    ));
    for variant in ["", " is-inverted", " is-outlined"] {
        for role in Role::ALL {
            let title = format!("{role}: {}", theme.get(role));
            let label = if variant.is_empty() {
                role.class_name()
            } else {
                variant.trim().to_string()
            };
            html.push_str(&format!(
                "<div><button class=\"button {}{variant}\" title=\"{}\">{}</button></div>\n",
                role.class_name(),
                html_escape(&title),
                html_escape(&label)
            ));
        }
    }
    html.push_str("</div>\n</div>\n</body>\n</html>\n");

    html
}
