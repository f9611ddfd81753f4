//! Theme registry and loader

mod dracula;
mod monokai;
mod nord;
mod one_dark;

use crate::theme::Theme;

/// Load a theme by name, unknown names fall back to gruvbox-dark
pub fn load_theme(name: &str) -> Theme {
    match name.to_lowercase().as_str() {
        "dracula" => dracula::default(),
        "nord" => nord::default(),
        "one-dark" | "onedark" => one_dark::default(),
        "monokai" => monokai::default(),
        _ => Theme::default(),
    }
}

/// Get list of available theme names
pub fn available_themes() -> Vec<&'static str> {
    vec!["gruvbox-dark", "dracula", "nord", "one-dark", "monokai"]
}

/// Theme following `current` in [`available_themes`], wrapping around
pub fn next_theme_name(current: &str) -> &'static str {
    let themes = available_themes();
    let position = themes
        .iter()
        .position(|t| t.eq_ignore_ascii_case(current))
        .unwrap_or(0);
    themes[(position + 1) % themes.len()]
}
