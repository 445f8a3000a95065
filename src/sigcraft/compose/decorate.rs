//! Which optional decorations a theme gets at a given intensity.
//!
//! Each decoration has an activation threshold. Below it the decoration is absent from the plan,
//! and the templates emit no markup for it at all.

use crate::model::Layout;
use crate::theme::{IconPosition, ThemeDefinition};
use serde::Serialize;

pub const GREETING_THRESHOLD: f32 = 0.3;
pub const FOOTER_THRESHOLD: f32 = 0.5;
pub const ICON_THRESHOLD: f32 = 0.5;
pub const DIVIDER_THRESHOLD: f32 = 0.3;
pub const LOGO_GRID_THRESHOLD: f32 = 0.5;

/// Smallest corner cell of the logo grid, in pixels.
const MIN_CORNER_WIDTH: u32 = 10;

/// Clamps into `[0, 1]`; NaN counts as no decoration.
pub fn clamp_intensity(intensity: f32) -> f32 {
    if intensity.is_nan() {
        0.0
    } else {
        intensity.clamp(0.0, 1.0)
    }
}

/// Corner glyphs laid out around the logo in a 3x3 table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogoGrid {
    pub top_left: Option<String>,
    pub top_right: Option<String>,
    pub bottom_left: Option<String>,
    pub bottom_right: Option<String>,
    /// Width and height of each corner cell.
    pub corner: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecorationPlan {
    pub greeting: Option<String>,
    pub footer: Option<String>,
    pub icon_before: Option<String>,
    pub icon_after: Option<String>,
    /// A single `border-right` declaration.
    pub divider: String,
    pub logo_grid: Option<LogoGrid>,
}

impl DecorationPlan {
    pub fn new(layout: Layout, theme: &ThemeDefinition, intensity: f32, logo_size: u32) -> Self {
        let intensity = clamp_intensity(intensity);
        let decorations = &theme.decorations;
        let messages = &theme.messages;

        let message = |text: &Option<String>, threshold: f32| {
            text.as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty() && intensity >= threshold)
                .map(str::to_string)
        };

        let icon = |position: IconPosition| {
            (decorations.enabled && intensity >= ICON_THRESHOLD)
                .then(|| decorations.icon(position).map(str::to_string))
                .flatten()
        };

        let divider = match decorations.divider_style {
            Some(style) if decorations.enabled && intensity >= DIVIDER_THRESHOLD => {
                style.border(&theme.colors.divider)
            }
            _ => format!("border-right: 1px solid {};", theme.colors.divider),
        };

        let logo_grid = if layout == Layout::Full
            && decorations.enabled
            && intensity >= LOGO_GRID_THRESHOLD
        {
            logo_grid(theme, logo_size)
        } else {
            None
        };

        Self {
            greeting: message(&messages.greeting, GREETING_THRESHOLD),
            footer: message(&messages.footer, FOOTER_THRESHOLD),
            icon_before: icon(IconPosition::Before),
            icon_after: icon(IconPosition::After),
            divider,
            logo_grid,
        }
    }
}

fn logo_grid(theme: &ThemeDefinition, logo_size: u32) -> Option<LogoGrid> {
    let overlay = theme.logo.overlay.as_ref()?;

    let corner = |position: IconPosition| {
        overlay
            .position
            .shows(position)
            .then(|| theme.decorations.icon(position).map(str::to_string))
            .flatten()
    };

    let grid = LogoGrid {
        top_left: corner(IconPosition::TopLeft),
        top_right: corner(IconPosition::TopRight),
        bottom_left: corner(IconPosition::BottomLeft),
        bottom_right: corner(IconPosition::BottomRight),
        corner: corner_width(logo_size, overlay.size),
    };

    let any_glyph = grid.top_left.is_some()
        || grid.top_right.is_some()
        || grid.bottom_left.is_some()
        || grid.bottom_right.is_some();

    any_glyph.then_some(grid)
}

fn corner_width(logo_size: u32, overlay_size: f32) -> u32 {
    let extra = (logo_size as f32 * (overlay_size - 1.0) / 2.0).round();
    if extra.is_finite() && extra > MIN_CORNER_WIDTH as f32 {
        extra as u32
    } else {
        MIN_CORNER_WIDTH
    }
}
