//! # Rendering
//!
//! Turns command results into terminal text. Handlers pass API types in; this module reshapes
//! them into template-ready views and renders those through [`Renderer`].
//!
//! Column alignment is display-width aware (`unicode-width`), since theme names may carry
//! non-ASCII characters.

use super::styles::{self, names};
use super::templates::TEMPLATES;
use minijinja::{Environment, Value};
use serde::Serialize;
use sigcraft::api::{CmdMessage, MessageLevel, PreferencesView};
use sigcraft::config::SigConfig;
use sigcraft::error::Result;
use sigcraft::theme::ThemeListing;
use unicode_width::UnicodeWidthStr;

const ACTIVE_MARKER: &str = "*";
const ALL_YEAR: &str = "all year";

/// Compiled CLI templates with the `style` filter bound to a color decision.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new(use_color: bool) -> Result<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_filter("style", move |value: Value, name: String| -> String {
            styles::apply(&name, &value.to_string(), use_color)
        });

        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Renders a template and drops trailing whitespace, so callers decide on line endings.
    fn render<T: Serialize>(&self, name: &str, data: T) -> Result<String> {
        let rendered = self.env.get_template(name)?.render(data)?;
        Ok(rendered.trim_end().to_string())
    }

    pub fn messages(&self, messages: &[CmdMessage]) -> Result<String> {
        let views: Vec<MessageView> = messages.iter().map(MessageView::from).collect();
        self.render("messages", minijinja::context! { messages => views })
    }

    pub fn themes(&self, themes: &[ThemeListing]) -> Result<String> {
        self.render("themes", minijinja::context! { themes => theme_rows(themes) })
    }

    pub fn preferences(&self, view: &PreferencesView) -> Result<String> {
        self.render(
            "preferences",
            minijinja::context! { prefs => PreferencesRow::from(view) },
        )
    }

    pub fn config(&self, config: &SigConfig) -> Result<String> {
        self.render("config", minijinja::context! { entries => config_rows(config) })
    }
}

#[derive(Serialize)]
struct MessageView {
    content: String,
    style: &'static str,
}

impl From<&CmdMessage> for MessageView {
    fn from(message: &CmdMessage) -> Self {
        let style = match message.level {
            MessageLevel::Info => names::INFO,
            MessageLevel::Success => names::SUCCESS,
            MessageLevel::Warning => names::WARNING,
            MessageLevel::Error => names::ERROR,
        };
        Self {
            content: message.content.clone(),
            style,
        }
    }
}

#[derive(Serialize)]
struct ThemeRow {
    marker: &'static str,
    name: String,
    name_style: &'static str,
    padding: String,
    id: String,
    id_padding: String,
    dates: String,
    in_season: bool,
    description: String,
}

fn pad_to(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(text.width()))
}

fn theme_rows(themes: &[ThemeListing]) -> Vec<ThemeRow> {
    let name_width = themes.iter().map(|t| t.name.width()).max().unwrap_or(0);
    let id_width = themes.iter().map(|t| t.id.width()).max().unwrap_or(0);

    themes
        .iter()
        .map(|theme| ThemeRow {
            marker: if theme.active { ACTIVE_MARKER } else { " " },
            name: theme.name.clone(),
            name_style: if theme.active {
                names::THEME_ACTIVE
            } else {
                names::THEME_NAME
            },
            padding: pad_to(&theme.name, name_width),
            id: theme.id.clone(),
            id_padding: pad_to(&theme.id, id_width),
            dates: theme
                .date_range
                .map(|range| format!("{} → {}", range.start, range.end))
                .unwrap_or_else(|| ALL_YEAR.to_string()),
            in_season: theme.in_season && theme.date_range.is_some(),
            description: theme.description.clone(),
        })
        .collect()
}

#[derive(Serialize)]
struct PreferencesRow {
    active_theme: String,
    active_theme_name: String,
    stored_theme: String,
    level: String,
    intensity: String,
    auto_detect: bool,
}

impl From<&PreferencesView> for PreferencesRow {
    fn from(view: &PreferencesView) -> Self {
        Self {
            active_theme: view.active_theme.clone(),
            active_theme_name: view.active_theme_name.clone(),
            stored_theme: view
                .preferences
                .explicit_theme()
                .unwrap_or(sigcraft::model::AUTO_THEME)
                .to_string(),
            level: view.level.to_string(),
            intensity: view.intensity.to_string(),
            auto_detect: view.preferences.auto_detect,
        }
    }
}

#[derive(Serialize)]
struct ConfigRow {
    key: &'static str,
    padding: String,
    value: String,
}

fn config_rows(config: &SigConfig) -> Vec<ConfigRow> {
    let entries = config.entries();
    let key_width = entries.iter().map(|(key, _)| key.width()).max().unwrap_or(0);

    entries
        .into_iter()
        .map(|(key, value)| ConfigRow {
            key,
            padding: pad_to(key, key_width),
            value,
        })
        .collect()
}
