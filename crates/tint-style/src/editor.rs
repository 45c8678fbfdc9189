#![forbid(unsafe_code)]

//! Editing session holding the current theme and page mode.
//!
//! Every mutation swaps in a whole new [`Theme`]; a failed import never
//! touches the current one.

use tracing::debug;

use crate::color::HexColor;
use crate::import::ImportError;
use crate::mode::Mode;
use crate::preview::render_preview;
use crate::role::Role;
use crate::stylesheet::{Stylesheet, StylesheetOptions};
use crate::theme::Theme;

/// The single in-memory theme plus display settings.
#[derive(Debug, Clone, Default)]
pub struct ThemeEditor {
    theme: Theme,
    mode: Mode,
    options: StylesheetOptions,
}

impl ThemeEditor {
    #[must_use]
    pub fn new(options: StylesheetOptions) -> Self {
        Self {
            theme: Theme::default(),
            mode: Mode::default(),
            options,
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn options(&self) -> &StylesheetOptions {
        &self.options
    }

    pub fn set_mode(&mut self, mode: Mode) {
        debug!(mode = mode.as_str(), "mode changed");
        self.mode = mode;
    }

    pub fn update_color(&mut self, role: Role, color: HexColor) {
        self.theme = self.theme.with_color(role, color);
    }

    /// Put `role` back at its built-in color. Returns `false` if it already was.
    pub fn reset(&mut self, role: Role) -> bool {
        if self.theme.is_default(role) {
            return false;
        }
        self.theme = self.theme.reset(role);
        true
    }

    pub fn reset_all(&mut self) {
        self.theme = Theme::default();
    }

    /// Replace the theme with `json` applied over the defaults.
    pub fn import_json(&mut self, json: &str) -> Result<(), ImportError> {
        self.theme = Theme::default().merge_json(json)?;
        Ok(())
    }

    /// Apply `json` over the current theme.
    pub fn merge_json(&mut self, json: &str) -> Result<(), ImportError> {
        self.theme = self.theme.merge_json(json)?;
        Ok(())
    }

    #[must_use]
    pub fn stylesheet(&self, custom_only: bool) -> String {
        let options = self.options.clone().custom_only(custom_only);
        Stylesheet::new(&self.theme, options).render()
    }

    #[must_use]
    pub fn preview(&self) -> String {
        render_preview(&self.theme, self.mode, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(value: &str) -> HexColor {
        value.parse().expect("valid hex")
    }

    #[test]
    fn reset_reports_whether_anything_changed() {
        let mut editor = ThemeEditor::default();
        assert!(!editor.reset(Role::Primary));
        editor.update_color(Role::Primary, hex("#123456"));
        assert!(editor.reset(Role::Primary));
        assert!(editor.theme().is_all_default());
    }

    #[test]
    fn import_replaces_theme_from_defaults() {
        let mut editor = ThemeEditor::default();
        editor.update_color(Role::Dark, hex("#101010"));
        editor
            .import_json(r##"{"primary":"#123456"}"##)
            .expect("import");
        assert_eq!(editor.theme().custom_roles(), vec![Role::Primary]);
    }

    #[test]
    fn merge_keeps_current_edits() {
        let mut editor = ThemeEditor::default();
        editor.update_color(Role::Dark, hex("#101010"));
        editor
            .merge_json(r##"{"primary":"#123456"}"##)
            .expect("merge");
        assert_eq!(editor.theme().custom_roles(), vec![Role::Primary, Role::Dark]);
    }

    #[test]
    fn failed_import_keeps_previous_theme() {
        let mut editor = ThemeEditor::default();
        editor.update_color(Role::Link, hex("#0000ff"));
        let before = editor.theme().clone();

        for payload in ["[]", r##"{"bogus":"#123456"}"##, r#"{"link":"blue"}"#] {
            assert!(editor.import_json(payload).is_err());
            assert_eq!(editor.theme(), &before);
        }
    }

    #[test]
    fn stylesheet_uses_editor_options() {
        let mut editor = ThemeEditor::new(StylesheetOptions::default().prefix("x"));
        editor.update_color(Role::Info, hex("#ff0000"));
        let css = editor.stylesheet(true);
        assert!(css.contains("--x-info-h: 0deg;"));
        assert_eq!(css.matches("/*").count(), 1);
    }

    #[test]
    fn preview_reflects_mode() {
        let mut editor = ThemeEditor::default();
        assert!(editor.preview().contains("data-theme=\"dark\""));
        editor.set_mode(Mode::Light);
        assert!(editor.preview().contains("data-theme=\"light\""));
    }
}
