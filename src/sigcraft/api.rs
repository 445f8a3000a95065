//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry point for
//! all sigcraft operations, regardless of the UI being used.
//!
//! The facade:
//! - **Owns** the theme catalog, the configuration, the compiled composer and the preference store
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** (`Result<CmdResult>`), never strings for display
//!
//! Business logic belongs in `commands/*.rs`; printing belongs to the client.
//!
//! `SigApi<S: PreferenceStore>` is generic over the preference backend:
//! - Production: `SigApi<FileStore>`
//! - Testing: `SigApi<InMemoryStore>`

use crate::commands::{self, config::ConfigAction, CmdResult, GenerateRequest, SigPaths};
use crate::compose::{extract_table, Composer};
use crate::config::SigConfig;
use crate::error::{Result, SigError};
use crate::store::PreferenceStore;
use crate::theme::ThemeCatalog;
use chrono::NaiveDate;
use std::path::Path;

pub use crate::commands::{CmdMessage, MessageLevel, PreferencesView, ThemeOverrides};

pub struct SigApi<S: PreferenceStore> {
    store: S,
    catalog: ThemeCatalog,
    config: SigConfig,
    composer: Composer,
    paths: SigPaths,
}

impl<S: PreferenceStore> SigApi<S> {
    pub fn new(
        store: S,
        catalog: ThemeCatalog,
        config: SigConfig,
        paths: SigPaths,
    ) -> Result<Self> {
        let composer = Composer::new(config.compose_settings())?;
        Ok(Self {
            store,
            catalog,
            config,
            composer,
            paths,
        })
    }

    pub fn catalog(&self) -> &ThemeCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &SigConfig {
        &self.config
    }

    pub fn generate(&self, request: &GenerateRequest) -> Result<CmdResult> {
        commands::generate::run(&self.store, &self.catalog, &self.composer, request)
    }

    pub fn copy(&self, request: &GenerateRequest) -> Result<CmdResult> {
        commands::copy::run(&self.store, &self.catalog, &self.composer, request)
    }

    pub fn export(&self, request: &GenerateRequest, dir: &Path) -> Result<CmdResult> {
        commands::export::run(
            &self.store,
            &self.catalog,
            &self.composer,
            &self.config,
            request,
            dir,
        )
    }

    pub fn list_themes(&self, date: &NaiveDate) -> Result<CmdResult> {
        commands::themes::run(&self.store, &self.catalog, date)
    }

    pub fn show_preferences(&self, date: &NaiveDate) -> Result<CmdResult> {
        commands::preferences::show(&self.store, &self.catalog, date)
    }

    pub fn set_theme(&mut self, theme_id: &str, date: &NaiveDate) -> Result<CmdResult> {
        commands::preferences::set_theme(&mut self.store, &self.catalog, theme_id, date)
    }

    pub fn set_decoration_level(&mut self, level: &str, date: &NaiveDate) -> Result<CmdResult> {
        commands::preferences::set_decoration_level(&mut self.store, &self.catalog, level, date)
    }

    pub fn set_auto_detect(&mut self, enabled: bool, date: &NaiveDate) -> Result<CmdResult> {
        commands::preferences::set_auto_detect(&mut self.store, &self.catalog, enabled, date)
    }

    pub fn reset_preferences(&mut self, date: &NaiveDate) -> Result<CmdResult> {
        commands::preferences::reset(&mut self.store, &self.catalog, date)
    }

    /// Reads or changes configuration. A successful change is applied to this instance too.
    pub fn config_action(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let is_set = matches!(action, ConfigAction::Set(..));
        let result = commands::config::run(&self.paths, action)?;

        if is_set {
            if let Some(config) = &result.config {
                self.composer = Composer::new(config.compose_settings())?;
                self.config = config.clone();
            }
        }
        Ok(result)
    }

    /// The first table of user-supplied HTML, e.g. a previously saved signature document.
    pub fn extract_table<'h>(&self, html: &'h str) -> Result<&'h str> {
        extract_table(html).ok_or(SigError::NoTable)
    }
}
