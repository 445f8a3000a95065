//! Theme resolution.
//!
//! Every function here is total: given a valid [`ThemeCatalog`] they always produce a theme.
//! Bad ids are answered with the fallback theme and logged at debug level; telling the user is
//! the caller's job (see `commands::generate`).

use super::{DateRange, MonthDay, ThemeCatalog, ThemeDefinition};
use crate::model::{DecorationLevel, SignaturePreferences};
use chrono::Datelike;
use serde::Serialize;

/// First available, dated theme (in catalog order) whose range contains `date`, else the
/// fallback.
pub fn resolve_for_date<'a, D: Datelike>(
    date: &D,
    catalog: &'a ThemeCatalog,
) -> &'a ThemeDefinition {
    let today = MonthDay::from_date(date);

    catalog
        .available()
        .find(|theme| theme.date_range.is_some_and(|range| range.contains(today)))
        .unwrap_or_else(|| catalog.fallback())
}

/// The theme with this id, or the fallback when it is unknown or unavailable.
pub fn resolve_by_id<'a>(id: &str, catalog: &'a ThemeCatalog) -> &'a ThemeDefinition {
    match catalog.get(id) {
        Some(theme) if theme.available => theme,
        Some(_) => {
            tracing::debug!(theme = id, "theme is not available, using fallback");
            catalog.fallback()
        }
        None => {
            tracing::debug!(theme = id, "unknown theme, using fallback");
            catalog.fallback()
        }
    }
}

/// Undated themes are always in season; unknown ids never are.
pub fn is_in_season<D: Datelike>(theme_id: &str, date: &D, catalog: &ThemeCatalog) -> bool {
    catalog
        .get(theme_id)
        .is_some_and(|theme| theme.in_season(MonthDay::from_date(date)))
}

/// Intensity for a level name. Unrecognized names count as `normal`.
pub fn decoration_intensity(level: &str) -> f32 {
    DecorationLevel::from_name_or_default(level).intensity()
}

/// Anything that can say which theme is in force and how strongly to decorate.
pub trait ThemeProvider {
    fn current_theme(&self) -> &ThemeDefinition;
    fn decoration_intensity(&self) -> f32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionSource {
    /// Picked from today's date.
    Auto,
    /// The stored theme id (or the fallback it degraded to).
    Explicit,
    /// Auto-detect off and nothing stored.
    Default,
}

/// The theme in force together with the decoration level, computed on demand from preferences.
#[derive(Debug, Clone, Copy)]
pub struct ThemeSelection<'a> {
    pub theme: &'a ThemeDefinition,
    pub level: DecorationLevel,
    pub source: SelectionSource,
}

impl<'a> ThemeSelection<'a> {
    /// A fixed theme and level, bypassing preferences.
    pub fn fixed(theme: &'a ThemeDefinition, level: DecorationLevel) -> Self {
        Self {
            theme,
            level,
            source: SelectionSource::Explicit,
        }
    }
}

impl ThemeProvider for ThemeSelection<'_> {
    fn current_theme(&self) -> &ThemeDefinition {
        self.theme
    }

    fn decoration_intensity(&self) -> f32 {
        self.level.intensity()
    }
}

/// Applies the preference rules: auto-detect uses the date, otherwise the stored id is
/// resolved, and with neither the fallback is used.
pub fn select_theme<'a, D: Datelike>(
    catalog: &'a ThemeCatalog,
    prefs: &SignaturePreferences,
    date: &D,
) -> ThemeSelection<'a> {
    let level = prefs.decoration_level();

    let (theme, source) = if prefs.auto_detect {
        (resolve_for_date(date, catalog), SelectionSource::Auto)
    } else if let Some(id) = prefs.explicit_theme() {
        (resolve_by_id(id, catalog), SelectionSource::Explicit)
    } else {
        (catalog.fallback(), SelectionSource::Default)
    };

    tracing::debug!(
        theme = %theme.id,
        level = %level,
        source = ?source,
        "theme selected"
    );

    ThemeSelection {
        theme,
        level,
        source,
    }
}

/// One row of the theme listing.
#[derive(Debug, Clone, Serialize)]
pub struct ThemeListing {
    pub id: String,
    pub name: String,
    pub description: String,
    pub date_range: Option<DateRange>,
    pub in_season: bool,
    pub active: bool,
}

/// Available themes, flagged with whether they are in season and whether they are in force.
pub fn list_themes<D: Datelike>(
    catalog: &ThemeCatalog,
    prefs: &SignaturePreferences,
    date: &D,
) -> Vec<ThemeListing> {
    let today = MonthDay::from_date(date);
    let active = select_theme(catalog, prefs, date).theme.id.clone();

    catalog
        .available()
        .map(|theme| ThemeListing {
            id: theme.id.clone(),
            name: theme.name.clone(),
            description: theme.description.clone(),
            date_range: theme.date_range,
            in_season: theme.in_season(today),
            active: theme.id == active,
        })
        .collect()
}
