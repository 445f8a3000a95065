use crate::compose::Signature;
use crate::config::SigConfig;
use crate::model::{ContactData, DecorationLevel, Layout, SignaturePreferences};
use crate::theme::ThemeListing;
use chrono::NaiveDate;
use serde::Serialize;
use std::path::PathBuf;

pub mod config;
pub mod copy;
pub mod export;
pub mod generate;
pub mod preferences;
pub mod themes;

#[derive(Debug, Clone)]
pub struct SigPaths {
    /// Holds `config.json` and `preferences.json`.
    pub config_dir: PathBuf,
}

/// Per-invocation changes to the stored theme preferences. Nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeOverrides {
    /// A theme id, or `auto` for date detection.
    pub theme: Option<String>,
    pub level: Option<DecorationLevel>,
    /// Skip theming entirely and use the base palette.
    pub plain: bool,
}

/// Everything needed to render signatures.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub contact: ContactData,
    pub layouts: Vec<Layout>,
    pub overrides: ThemeOverrides,
    /// The day used for seasonal detection.
    pub date: NaiveDate,
}

impl GenerateRequest {
    pub fn new(contact: ContactData, layouts: Vec<Layout>, date: NaiveDate) -> Self {
        Self {
            contact,
            layouts,
            overrides: ThemeOverrides::default(),
            date,
        }
    }

    pub fn with_overrides(mut self, overrides: ThemeOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

/// Stored preferences plus what they currently resolve to.
#[derive(Debug, Clone, Serialize)]
pub struct PreferencesView {
    pub preferences: SignaturePreferences,
    pub active_theme: String,
    pub active_theme_name: String,
    pub level: DecorationLevel,
    pub intensity: f32,
}

/// Severity of a status line. An `Error` message makes the CLI exit non-zero even though the
/// command itself returned `Ok`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A status line for the user: theme in use, files written, rejected input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn new(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
        }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Error, content)
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub signatures: Vec<Signature>,
    pub themes: Vec<ThemeListing>,
    pub written_paths: Vec<PathBuf>,
    pub preferences: Option<PreferencesView>,
    pub config: Option<SigConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_signatures(mut self, signatures: Vec<Signature>) -> Self {
        self.signatures = signatures;
        self
    }

    pub fn with_themes(mut self, themes: Vec<ThemeListing>) -> Self {
        self.themes = themes;
        self
    }

    pub fn with_written_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.written_paths = paths;
        self
    }

    pub fn with_preferences(mut self, view: PreferencesView) -> Self {
        self.preferences = Some(view);
        self
    }

    pub fn with_config(mut self, config: SigConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// The most severe message level, if there are any messages.
    pub fn worst_level(&self) -> Option<MessageLevel> {
        self.messages.iter().map(|m| m.level).max()
    }

    pub fn has_errors(&self) -> bool {
        self.worst_level() == Some(MessageLevel::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worst_level_drives_errors() {
        let result = CmdResult::default();
        assert_eq!(result.worst_level(), None);
        assert!(!result.has_errors());

        let result = result
            .with_message(CmdMessage::warning("Theme 'x' is not available"))
            .with_message(CmdMessage::success("saved"));
        assert_eq!(result.worst_level(), Some(MessageLevel::Warning));
        assert!(!result.has_errors());

        let result = result.with_message(CmdMessage::new(MessageLevel::Error, "boom"));
        assert!(result.has_errors());
        assert_eq!(result.messages[2], CmdMessage::error("boom"));
    }
}
