#![forbid(unsafe_code)]

//! Theme model and stylesheet generation for Bulma color customisation.
//!
//! # This crate provides
//! - [`HexColor`], [`Rgb`], and [`Hsl`] with the hex-to-HSL converter.
//! - [`Role`], the fixed set of Bulma color roles in output order.
//! - [`Theme`], a complete role-to-color assignment edited copy-on-write.
//! - [`Stylesheet`] for CSS custom-property export.
//! - [`import_theme`] and [`Theme::to_json`] for the JSON exchange format.
//! - [`ThemeEditor`] tying the above into a single editing session, and an
//!   HTML preview of sample buttons.
//!
//! # Example
//! ```
//! use tint_style::{Role, ThemeEditor};
//!
//! let mut editor = ThemeEditor::default();
//! editor.update_color(Role::Primary, "#ff0000".parse().unwrap());
//! let css = editor.stylesheet(true);
//! assert!(css.contains("--bulma-primary-h: 0deg;"));
//! ```

/// Color types and the RGB to HSL converter.
pub mod color;
/// Editing session state.
pub mod editor;
/// JSON theme import and export.
pub mod import;
/// Light/dark page mode.
pub mod mode;
/// HTML preview rendering.
pub mod preview;
/// The fixed role set.
pub mod role;
/// CSS custom-property export.
pub mod stylesheet;
/// Theme state.
pub mod theme;

pub use color::{ColorError, HexColor, Hsl, Rgb, is_hex_color, rgb_to_hsl};
pub use editor::ThemeEditor;
pub use import::{ImportError, import_theme};
pub use mode::{Mode, ModeError};
pub use preview::render_preview;
pub use role::{Role, RoleError};
pub use stylesheet::{
    CssVariable, DEFAULT_BASE_IMPORT, DEFAULT_PREFIX, OptionsError, Stylesheet, StylesheetOptions,
    export_stylesheet, validate_base_import, validate_prefix,
};
pub use theme::{EditError, Theme, default_theme};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editor_session_end_to_end() {
        let mut editor = ThemeEditor::default();
        editor
            .import_json(r##"{"primary":"#123456","white":"#fafafa"}"##)
            .expect("import");
        editor.update_color(Role::Link, "#00ff00".parse().expect("hex"));
        assert!(editor.reset(Role::White));

        let css = editor.stylesheet(true);
        assert_eq!(css.matches("/* ").count(), 2);
        assert!(css.find("/* primary */") < css.find("/* link */"));

        let exported = editor.theme().to_json(true).expect("serialize");
        assert_eq!(import_theme(&exported).expect("re-import"), *editor.theme());
    }
}
