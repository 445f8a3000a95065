//! Terminal styles for the sigcraft CLI.
//!
//! Templates refer to styles by semantic name (`theme-active`, `config-key`) through the `style`
//! filter; only this module knows what those names look like. Brand accents follow the standard
//! signature palette, reduced to the 256-color table.
//!
//! A name with no registered style renders with the `(!?)` marker in front, colors or not, so a
//! typo in a template shows up in the output instead of silently rendering plain.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const MUTED: &str = "muted";
    pub const TITLE: &str = "title";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    pub const THEME_ACTIVE: &str = "theme-active";
    pub const THEME_NAME: &str = "theme-name";
    pub const IN_SEASON: &str = "in-season";
    pub const CONFIG_KEY: &str = "config-key";
    pub const CONFIG_VALUE: &str = "config-value";
}

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

pub static STYLES: Lazy<HashMap<&'static str, Style>> = Lazy::new(build_styles);

fn build_styles() -> HashMap<&'static str, Style> {
    let brand = Style::new().color256(rgb_to_ansi256((44, 130, 72)));
    let accent = Style::new().color256(rgb_to_ansi256((171, 221, 101)));
    let muted = Style::new().color256(rgb_to_ansi256((128, 128, 128)));

    HashMap::from([
        (names::MUTED, muted.clone()),
        (names::TITLE, Style::new().bold()),
        (names::ERROR, Style::new().red().bold()),
        (names::WARNING, Style::new().yellow().bold()),
        (names::SUCCESS, Style::new().green()),
        (names::INFO, muted.clone()),
        (names::THEME_ACTIVE, accent.bold()),
        (names::THEME_NAME, Style::new().bold()),
        (names::IN_SEASON, brand.clone()),
        (names::CONFIG_KEY, brand),
        (names::CONFIG_VALUE, Style::new()),
    ])
}

/// Styles `text` with the named style, or passes it through untouched when colors are off.
pub fn apply(name: &str, text: &str, use_color: bool) -> String {
    match STYLES.get(name) {
        Some(style) if use_color => style.apply_to(text).to_string(),
        Some(_) => text.to_string(),
        None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
    }
}

/// Nearest ANSI 256-color palette index for an RGB triplet.
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}
