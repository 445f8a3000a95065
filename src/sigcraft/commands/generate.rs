use crate::commands::{CmdMessage, CmdResult, GenerateRequest, ThemeOverrides};
use crate::compose::Composer;
use crate::error::Result;
use crate::model::{Layout, AUTO_THEME};
use crate::store::{load_preferences, PreferenceStore};
use crate::theme::{
    resolve_by_id, resolve_for_date, select_theme, SelectionSource, ThemeCatalog,
    ThemeSelection,
};
use chrono::NaiveDate;

/// A user-facing note when `id` cannot be used and the fallback will stand in.
pub(crate) fn unusable_theme_warning(catalog: &ThemeCatalog, id: &str) -> Option<String> {
    let fallback = &catalog.fallback().name;
    match catalog.get(id) {
        Some(theme) if theme.available => None,
        Some(theme) => Some(format!(
            "Theme '{}' is not available, using {}",
            theme.id, fallback
        )),
        None => Some(format!("Unknown theme '{}', using {}", id, fallback)),
    }
}

/// Stored preferences with the per-run overrides applied. `None` means unthemed.
pub(crate) fn effective_selection<'a, S: PreferenceStore>(
    store: &S,
    catalog: &'a ThemeCatalog,
    overrides: &ThemeOverrides,
    date: &NaiveDate,
    result: &mut CmdResult,
) -> Option<ThemeSelection<'a>> {
    if overrides.plain {
        return None;
    }

    let prefs = load_preferences(store);
    let mut selection = select_theme(catalog, &prefs, date);

    if selection.source == SelectionSource::Explicit {
        if let Some(warning) = prefs
            .explicit_theme()
            .and_then(|id| unusable_theme_warning(catalog, id))
        {
            result.add_message(CmdMessage::warning(warning));
        }
    }

    if let Some(id) = overrides.theme.as_deref().map(str::trim) {
        if id.eq_ignore_ascii_case(AUTO_THEME) {
            selection.theme = resolve_for_date(date, catalog);
            selection.source = SelectionSource::Auto;
        } else {
            if let Some(warning) = unusable_theme_warning(catalog, id) {
                result.add_message(CmdMessage::warning(warning));
            }
            selection.theme = resolve_by_id(id, catalog);
            selection.source = SelectionSource::Explicit;
        }
    }

    if let Some(level) = overrides.level {
        selection.level = level;
    }

    Some(selection)
}

pub fn run<S: PreferenceStore>(
    store: &S,
    catalog: &ThemeCatalog,
    composer: &Composer,
    request: &GenerateRequest,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let selection =
        effective_selection(store, catalog, &request.overrides, &request.date, &mut result);

    let layouts: &[Layout] = if request.layouts.is_empty() {
        &Layout::ALL
    } else {
        &request.layouts
    };

    let mut signatures = Vec::with_capacity(layouts.len());
    for layout in layouts {
        let signature = match &selection {
            Some(selection) => composer.compose_with(*layout, &request.contact, selection)?,
            None => composer.compose(*layout, &request.contact, None, 0.0)?,
        };
        signatures.push(signature);
    }

    let note = match &selection {
        Some(selection) => format!("Theme: {} ({})", selection.theme.name, selection.level),
        None => "Theme: none (plain)".to_string(),
    };
    result.add_message(CmdMessage::info(note));

    Ok(result.with_signatures(signatures))
}
