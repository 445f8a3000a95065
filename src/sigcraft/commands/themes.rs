use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{load_preferences, PreferenceStore};
use crate::theme::{list_themes, ThemeCatalog};
use chrono::NaiveDate;

/// Lists the selectable themes, flagging which are in season and which one is in force.
pub fn run<S: PreferenceStore>(
    store: &S,
    catalog: &ThemeCatalog,
    date: &NaiveDate,
) -> Result<CmdResult> {
    let prefs = load_preferences(store);
    let listing = list_themes(catalog, &prefs, date);

    let mut result = CmdResult::default();
    if prefs.auto_detect {
        result.add_message(CmdMessage::info(
            "Auto-detect is on: the theme follows the season",
        ));
    }

    Ok(result.with_themes(listing))
}
