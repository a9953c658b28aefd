//! Supporting helpers for console message prefixes.

use owo_colors::OwoColorize;

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Prefix for error messages on stderr.
pub fn error_prefix() -> String {
    if colors_enabled() {
        "⟦error⟧".red().bold().to_string()
    } else {
        "⟦error⟧".to_string()
    }
}

/// Prefix for friendly notes on stderr.
pub fn note_prefix() -> String {
    if colors_enabled() {
        "⟦note⟧".yellow().bold().to_string()
    } else {
        "⟦note⟧".to_string()
    }
}

/// Prefix for progress messages on stderr.
pub fn info_prefix() -> String {
    if colors_enabled() {
        "⟦info⟧".blue().bold().to_string()
    } else {
        "⟦info⟧".to_string()
    }
}
