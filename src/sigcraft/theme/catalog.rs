use super::{
    DateRange, Decorations, DividerStyle, IconPosition, LogoDescriptor, LogoKind, LogoOverlay,
    LogoSizes, MonthDay, OverlayPosition, ThemeColors, ThemeDefinition, ThemeMessages,
};
use crate::error::{Result, SigError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// On-disk shape of a catalog file.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogFile {
    themes: Vec<ThemeDefinition>,
}

/// An ordered, validated set of themes with exactly one undated fallback.
///
/// Construction is the only place the catalog invariants are checked; everything downstream
/// (the resolver in particular) relies on them and never fails.
#[derive(Debug, Clone)]
pub struct ThemeCatalog {
    themes: Vec<ThemeDefinition>,
    fallback: usize,
}

impl ThemeCatalog {
    pub fn new(themes: Vec<ThemeDefinition>) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut fallback = None;

        for (index, theme) in themes.iter().enumerate() {
            let id = theme.id.trim();
            if id.is_empty() {
                return Err(SigError::Catalog(format!(
                    "theme #{} has an empty id",
                    index + 1
                )));
            }
            if !seen.insert(id) {
                return Err(SigError::Catalog(format!("duplicate theme id '{}'", id)));
            }

            for (role, color) in theme.colors.roles() {
                if color.trim().is_empty() {
                    return Err(SigError::Catalog(format!(
                        "theme '{}' has an empty {} color",
                        id, role
                    )));
                }
            }

            match theme.date_range {
                Some(range) => {
                    for bound in [range.start, range.end] {
                        if !bound.is_valid() {
                            return Err(SigError::Catalog(format!(
                                "theme '{}' has an invalid date {}",
                                id, bound
                            )));
                        }
                    }
                }
                None => {
                    if let Some(previous) = fallback.replace(index) {
                        return Err(SigError::Catalog(format!(
                            "themes '{}' and '{}' both have no date range; only the fallback may",
                            themes[previous].id, id
                        )));
                    }
                }
            }
        }

        let fallback = fallback.ok_or_else(|| {
            SigError::Catalog("no fallback theme (a theme without a date range)".to_string())
        })?;
        if !themes[fallback].available {
            return Err(SigError::Catalog(format!(
                "fallback theme '{}' must be available",
                themes[fallback].id
            )));
        }

        Ok(Self { themes, fallback })
    }

    /// Parses a catalog from JSON. `embedded_file` entries are left untouched; use
    /// [`ThemeCatalog::load`] to have them read.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.themes)
    }

    /// Loads a catalog file, inlining `embedded_file` logos relative to the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut file: CatalogFile = serde_json::from_str(&content)?;
        let base = path.parent().unwrap_or_else(|| Path::new("."));

        for theme in &mut file.themes {
            inline_embedded_logo(&theme.id, &mut theme.logo, base);
        }

        tracing::debug!(
            path = %path.display(),
            themes = file.themes.len(),
            "loaded theme catalog"
        );
        Self::new(file.themes)
    }

    pub fn to_json(&self) -> Result<String> {
        let file = CatalogFile {
            themes: self.themes.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    pub fn fallback(&self) -> &ThemeDefinition {
        &self.themes[self.fallback]
    }

    pub fn get(&self, id: &str) -> Option<&ThemeDefinition> {
        self.themes.iter().find(|theme| theme.id == id)
    }

    /// All themes in declaration order, available or not.
    pub fn iter(&self) -> impl Iterator<Item = &ThemeDefinition> {
        self.themes.iter()
    }

    pub fn available(&self) -> impl Iterator<Item = &ThemeDefinition> {
        self.themes.iter().filter(|theme| theme.available)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    /// The catalog shipped with the tool.
    pub fn builtin() -> Self {
        Self {
            themes: builtin_themes(),
            fallback: 0,
        }
    }
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn inline_embedded_logo(theme_id: &str, logo: &mut LogoDescriptor, base: &Path) {
    let Some(relative) = logo.embedded_file.take() else {
        return;
    };
    let path = base.join(&relative);

    match fs::read_to_string(&path) {
        Ok(data) => {
            let data = data.trim();
            logo.embedded = Some(if data.starts_with("data:") {
                data.to_string()
            } else {
                format!("{}{}", DATA_URI_PREFIX, data)
            });
        }
        Err(e) => {
            tracing::warn!(
                theme = theme_id,
                path = %path.display(),
                error = %e,
                "embedded logo could not be read, using image path"
            );
        }
    }
}

fn md(month: u32, day: u32) -> MonthDay {
    MonthDay { month, day }
}

fn brand_colors() -> ThemeColors {
    ThemeColors {
        primary: "#17232D".into(),
        secondary: "#2C8248".into(),
        accent: "#ABDD65".into(),
        divider: "#2C8248".into(),
        text: "#17232D".into(),
        link: "#2C8248".into(),
    }
}

fn brand_logo() -> LogoDescriptor {
    LogoDescriptor {
        kind: LogoKind::Standard,
        image: "assets/images/logo.png".into(),
        symbol: Some("assets/images/symbol.png".into()),
        embedded: None,
        embedded_file: None,
        overlay: None,
        sizes: LogoSizes::default(),
    }
}

/// The undated house theme. Also the palette used when composing without any theme.
pub fn standard_theme() -> ThemeDefinition {
    ThemeDefinition {
        id: "standard".into(),
        name: "Standard".into(),
        description: "Classic company branding".into(),
        available: true,
        date_range: None,
        colors: brand_colors(),
        logo: brand_logo(),
        decorations: Decorations::default(),
        messages: ThemeMessages::default(),
    }
}

fn builtin_themes() -> Vec<ThemeDefinition> {
    let christmas_logo = "assets/images/themes/christmas/logo-transparent.png";

    vec![
        standard_theme(),
        ThemeDefinition {
            id: "christmas".into(),
            name: "Christmas".into(),
            description: "Holiday office closure period".into(),
            available: true,
            date_range: Some(DateRange::new(md(11, 20), md(12, 31))),
            colors: brand_colors(),
            logo: LogoDescriptor {
                kind: LogoKind::Themed,
                image: christmas_logo.into(),
                symbol: Some(christmas_logo.into()),
                ..brand_logo()
            },
            decorations: Decorations::default(),
            messages: ThemeMessages {
                footer: Some(
                    "We're taking a moment to slow down, recharge and reset for the year ahead. \
                     The team will be offline over the holiday break, returning with fresh energy \
                     in the new year."
                        .into(),
                ),
                greeting: None,
                signoff: None,
            },
        },
        ThemeDefinition {
            id: "new-year".into(),
            name: "New Year".into(),
            description: "Celebrate the new year with elegance".into(),
            available: false,
            date_range: Some(DateRange::new(md(12, 26), md(1, 10))),
            colors: ThemeColors {
                primary: "#17232D".into(),
                secondary: "#FFD700".into(),
                accent: "#C0C0C0".into(),
                divider: "#FFD700".into(),
                text: "#17232D".into(),
                link: "#B8860B".into(),
            },
            logo: LogoDescriptor {
                kind: LogoKind::Themed,
                overlay: Some(LogoOverlay {
                    position: OverlayPosition::Around,
                    size: 1.2,
                }),
                ..brand_logo()
            },
            decorations: Decorations {
                enabled: true,
                divider_style: Some(DividerStyle::Dotted),
                icons: BTreeMap::from([
                    (IconPosition::TopLeft, "\u{2728}".to_string()),
                    (IconPosition::TopRight, "\u{1F38A}".to_string()),
                    (IconPosition::BottomLeft, "\u{1F389}".to_string()),
                    (IconPosition::BottomRight, "\u{2728}".to_string()),
                ]),
            },
            messages: ThemeMessages {
                footer: Some("Here's to a prosperous year ahead!".into()),
                greeting: Some("Best wishes for the New Year".into()),
                signoff: Some("Happy New Year,".into()),
            },
        },
        ThemeDefinition {
            id: "easter".into(),
            name: "Easter".into(),
            description: "Spring celebration theme".into(),
            available: false,
            date_range: Some(DateRange::new(md(3, 15), md(4, 30))),
            colors: ThemeColors {
                primary: "#17232D".into(),
                secondary: "#E6B8EA".into(),
                accent: "#FFE5B4".into(),
                divider: "#B4E5FF".into(),
                text: "#17232D".into(),
                link: "#9370DB".into(),
            },
            logo: brand_logo(),
            decorations: Decorations::default(),
            messages: ThemeMessages::default(),
        },
        ThemeDefinition {
            id: "halloween".into(),
            name: "Halloween".into(),
            description: "Spooky season theme (subtle)".into(),
            available: false,
            date_range: Some(DateRange::new(md(10, 15), md(11, 1))),
            colors: ThemeColors {
                primary: "#17232D".into(),
                secondary: "#FF8C00".into(),
                accent: "#8B4513".into(),
                divider: "#FF8C00".into(),
                text: "#17232D".into(),
                link: "#D2691E".into(),
            },
            logo: brand_logo(),
            decorations: Decorations::default(),
            messages: ThemeMessages::default(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn minimal_json(extra: &str) -> String {
        format!(
            r##"{{ "themes": [
                {{
                    "id": "plain",
                    "name": "Plain",
                    "colors": {{ "primary": "#111", "secondary": "#222", "accent": "#333",
                                 "divider": "#444", "text": "#555", "link": "#666" }},
                    "logo": {{ "image": "logo.png" }}
                }}{}
            ] }}"##,
            extra
        )
    }

    #[test]
    fn test_builtin_catalog_satisfies_invariants() {
        let builtin = ThemeCatalog::builtin();
        let validated = ThemeCatalog::new(builtin.iter().cloned().collect()).unwrap();
        assert_eq!(validated.fallback().id, "standard");
        assert_eq!(builtin.fallback().id, "standard");
        assert_eq!(builtin.len(), 5);
    }

    #[test]
    fn test_builtin_availability() {
        let catalog = ThemeCatalog::builtin();
        let available: Vec<_> = catalog.available().map(|t| t.id.as_str()).collect();
        assert_eq!(available, vec!["standard", "christmas"]);
    }

    #[test]
    fn test_from_json_applies_defaults() {
        let catalog = ThemeCatalog::from_json(&minimal_json("")).unwrap();
        let theme = catalog.fallback();
        assert!(theme.available);
        assert_eq!(theme.logo.sizes, LogoSizes::default());
        assert!(!theme.decorations.enabled);
    }

    #[test]
    fn test_rejects_two_undated_themes() {
        let colors = concat!(
            r##"{ "primary": "#1", "secondary": "#2", "accent": "#3", "##,
            r##""divider": "#4", "text": "#5", "link": "#6" }"##
        );
        let json = minimal_json(&format!(
            r#", {{ "id": "other", "name": "O", "colors": {}, "logo": {{ "image": "x.png" }} }}"#,
            colors
        ));
        let err = ThemeCatalog::from_json(&json).unwrap_err();
        assert!(matches!(err, SigError::Catalog(_)));
    }

    #[test]
    fn test_rejects_invalid_month_day() {
        let mut themes: Vec<_> = ThemeCatalog::builtin().iter().cloned().collect();
        themes[1].date_range = Some(DateRange::new(md(2, 30), md(3, 1)));
        assert!(matches!(
            ThemeCatalog::new(themes),
            Err(SigError::Catalog(_))
        ));
    }

    #[test]
    fn test_rejects_unavailable_fallback() {
        let mut themes: Vec<_> = ThemeCatalog::builtin().iter().cloned().collect();
        themes[0].available = false;
        assert!(ThemeCatalog::new(themes).is_err());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut themes: Vec<_> = ThemeCatalog::builtin().iter().cloned().collect();
        themes[2].id = "christmas".into();
        assert!(ThemeCatalog::new(themes).is_err());
    }

    #[test]
    fn test_load_inlines_embedded_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("logo.b64"), "iVBORw0KGgo=\n").unwrap();
        let json = minimal_json("").replace(
            r#""image": "logo.png""#,
            r#""image": "logo.png", "embedded_file": "logo.b64""#,
        );
        let path = dir.path().join("themes.json");
        std::fs::write(&path, json).unwrap();

        let catalog = ThemeCatalog::load(&path).unwrap();
        assert_eq!(
            catalog.fallback().logo.embedded.as_deref(),
            Some("data:image/png;base64,iVBORw0KGgo=")
        );
    }

    #[test]
    fn test_load_missing_embedded_file_keeps_image() {
        let dir = TempDir::new().unwrap();
        let json = minimal_json("").replace(
            r#""image": "logo.png""#,
            r#""image": "logo.png", "embedded_file": "missing.b64""#,
        );
        let path = dir.path().join("themes.json");
        std::fs::write(&path, json).unwrap();

        let catalog = ThemeCatalog::load(&path).unwrap();
        assert_eq!(catalog.fallback().logo.embedded, None);
        assert_eq!(catalog.fallback().logo.image, "logo.png");
    }

    #[test]
    fn test_json_round_trip_of_builtin() {
        let json = ThemeCatalog::builtin().to_json().unwrap();
        let parsed = ThemeCatalog::from_json(&json).unwrap();
        let new_year = parsed.get("new-year").unwrap();
        assert_eq!(new_year.decorations.divider_style, Some(DividerStyle::Dotted));
        assert_eq!(
            new_year.decorations.icon(IconPosition::TopRight),
            Some("\u{1F38A}")
        );
    }
}
