//! Theme preference changes.
//!
//! Every change loads the stored blob, modifies it and overwrites it whole. Invalid input is
//! answered with a warning message and leaves the stored blob untouched.

use crate::commands::generate::unusable_theme_warning;
use crate::commands::{CmdMessage, CmdResult, PreferencesView};
use crate::error::Result;
use crate::model::{DecorationLevel, SignaturePreferences, AUTO_THEME};
use crate::store::{load_preferences, save_preferences, PreferenceStore};
use crate::theme::{select_theme, ThemeCatalog, ThemeProvider};
use chrono::NaiveDate;

fn view(catalog: &ThemeCatalog, prefs: SignaturePreferences, date: &NaiveDate) -> PreferencesView {
    let selection = select_theme(catalog, &prefs, date);
    PreferencesView {
        active_theme: selection.theme.id.clone(),
        active_theme_name: selection.theme.name.clone(),
        level: selection.level,
        intensity: selection.decoration_intensity(),
        preferences: prefs,
    }
}

pub fn show<S: PreferenceStore>(
    store: &S,
    catalog: &ThemeCatalog,
    date: &NaiveDate,
) -> Result<CmdResult> {
    let prefs = load_preferences(store);
    Ok(CmdResult::default().with_preferences(view(catalog, prefs, date)))
}

/// `auto` turns date detection on. Any other id turns it off and is stored as given, even when
/// it is not currently usable; resolution falls back until it is.
pub fn set_theme<S: PreferenceStore>(
    store: &mut S,
    catalog: &ThemeCatalog,
    theme_id: &str,
    date: &NaiveDate,
) -> Result<CmdResult> {
    let theme_id = theme_id.trim();
    let mut prefs = load_preferences(store);
    let mut result = CmdResult::default();

    if theme_id.is_empty() || theme_id.eq_ignore_ascii_case(AUTO_THEME) {
        prefs.theme_id = None;
        prefs.auto_detect = true;
        save_preferences(store, &prefs)?;
        result.add_message(CmdMessage::success("Theme set to auto-detect"));
    } else {
        prefs.theme_id = Some(theme_id.to_string());
        prefs.auto_detect = false;
        save_preferences(store, &prefs)?;
        match unusable_theme_warning(catalog, theme_id) {
            Some(warning) => result.add_message(CmdMessage::warning(warning)),
            None => result.add_message(CmdMessage::success(format!(
                "Theme set to {}",
                theme_id
            ))),
        }
    }

    Ok(result.with_preferences(view(catalog, prefs, date)))
}

pub fn set_decoration_level<S: PreferenceStore>(
    store: &mut S,
    catalog: &ThemeCatalog,
    level: &str,
    date: &NaiveDate,
) -> Result<CmdResult> {
    let mut prefs = load_preferences(store);
    let mut result = CmdResult::default();

    match level.parse::<DecorationLevel>() {
        Ok(level) => {
            prefs.decoration_level = level.name().to_string();
            save_preferences(store, &prefs)?;
            result.add_message(CmdMessage::success(format!(
                "Decoration level set to {} ({})",
                level,
                level.intensity()
            )));
        }
        Err(e) => {
            tracing::debug!(error = %e, "decoration level rejected");
            result.add_message(CmdMessage::warning(e));
        }
    }

    Ok(result.with_preferences(view(catalog, prefs, date)))
}

pub fn set_auto_detect<S: PreferenceStore>(
    store: &mut S,
    catalog: &ThemeCatalog,
    enabled: bool,
    date: &NaiveDate,
) -> Result<CmdResult> {
    let mut prefs = load_preferences(store);
    prefs.auto_detect = enabled;
    save_preferences(store, &prefs)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(if enabled {
        "Auto-detect enabled"
    } else {
        "Auto-detect disabled"
    }));

    Ok(result.with_preferences(view(catalog, prefs, date)))
}

pub fn reset<S: PreferenceStore>(
    store: &mut S,
    catalog: &ThemeCatalog,
    date: &NaiveDate,
) -> Result<CmdResult> {
    store.clear()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Preferences reset to defaults"));

    Ok(result.with_preferences(view(catalog, SignaturePreferences::default(), date)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 10).unwrap()
    }

    #[test]
    fn test_show_defaults() {
        let res = show(&InMemoryStore::new(), &ThemeCatalog::builtin(), &date()).unwrap();
        let view = res.preferences.unwrap();
        assert!(view.preferences.auto_detect);
        assert_eq!(view.active_theme, "christmas");
        assert_eq!(view.intensity, 0.6);
    }

    #[test]
    fn test_set_theme_turns_auto_detect_off() {
        let mut store = InMemoryStore::new();
        let res = set_theme(&mut store, &ThemeCatalog::builtin(), "standard", &date()).unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Success);

        let prefs = load_preferences(&store);
        assert!(!prefs.auto_detect);
        assert_eq!(prefs.explicit_theme(), Some("standard"));
        assert_eq!(res.preferences.unwrap().active_theme, "standard");
    }

    #[test]
    fn test_set_unavailable_theme_is_stored_with_warning() {
        let mut store = InMemoryStore::new();
        let res = set_theme(&mut store, &ThemeCatalog::builtin(), "easter", &date()).unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Warning);
        assert_eq!(load_preferences(&store).explicit_theme(), Some("easter"));
        assert_eq!(res.preferences.unwrap().active_theme, "standard");
    }

    #[test]
    fn test_set_theme_auto() {
        let mut fixture = StoreFixture::new().with_theme("standard");
        set_theme(&mut fixture.store, &ThemeCatalog::builtin(), "auto", &date()).unwrap();
        let prefs = load_preferences(&fixture.store);
        assert!(prefs.auto_detect);
        assert_eq!(prefs.theme_id, None);
    }

    #[test]
    fn test_invalid_level_saves_nothing() {
        let mut store = InMemoryStore::new();
        let res =
            set_decoration_level(&mut store, &ThemeCatalog::builtin(), "sparkly", &date()).unwrap();
        assert_eq!(res.messages[0].level, MessageLevel::Warning);
        assert_eq!(
            res.messages[0].content,
            "Invalid decoration level: sparkly. Valid levels: minimal, normal, festive"
        );
        assert_eq!(store.read_blob().unwrap(), None);
    }

    #[test]
    fn test_valid_level_is_saved() {
        let mut store = InMemoryStore::new();
        set_decoration_level(&mut store, &ThemeCatalog::builtin(), "Festive", &date()).unwrap();
        assert_eq!(load_preferences(&store).decoration_level, "festive");
    }

    #[test]
    fn test_auto_detect_off_keeps_stored_theme() {
        let mut fixture = StoreFixture::new().with_theme("christmas");
        set_auto_detect(&mut fixture.store, &ThemeCatalog::builtin(), true, &date()).unwrap();
        let res =
            set_auto_detect(&mut fixture.store, &ThemeCatalog::builtin(), false, &date()).unwrap();
        assert_eq!(res.preferences.unwrap().active_theme, "christmas");
    }

    #[test]
    fn test_reset_clears_blob() {
        let mut fixture = StoreFixture::new().with_theme("christmas").with_level("minimal");
        let res = reset(&mut fixture.store, &ThemeCatalog::builtin(), &date()).unwrap();
        assert_eq!(fixture.store.read_blob().unwrap(), None);
        assert_eq!(
            res.preferences.unwrap().preferences,
            SignaturePreferences::default()
        );
    }
}
