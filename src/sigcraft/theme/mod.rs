//! # Themes
//!
//! A theme is a named bundle of colors, logo assets, decoration flags and seasonal messages
//! that is laid over the base signature template.
//!
//! - [`ThemeDefinition`] and its parts are plain data, deserializable from a catalog file.
//! - [`catalog::ThemeCatalog`] is the ordered, validated set of themes.
//! - [`resolver`] decides which theme is in force.
//!
//! Catalog order matters: when two seasonal ranges overlap, the earlier theme wins, so themes
//! are kept in a `Vec`, never a hash map.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

pub mod catalog;
pub mod resolver;

pub use catalog::ThemeCatalog;
pub use resolver::{
    decoration_intensity, is_in_season, list_themes, resolve_by_id, resolve_for_date,
    select_theme, SelectionSource, ThemeListing, ThemeProvider, ThemeSelection,
};

/// A calendar month and day, year-less.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

const DAYS_IN_MONTH: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

impl MonthDay {
    /// Returns `None` for impossible dates. February 29 is valid.
    pub fn new(month: u32, day: u32) -> Option<Self> {
        let md = Self { month, day };
        md.is_valid().then_some(md)
    }

    pub fn from_date<D: Datelike>(date: &D) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month)
            && self.day >= 1
            && self.day <= DAYS_IN_MONTH[(self.month - 1) as usize]
    }

    /// `month * 100 + day`, the comparison key for ranges.
    pub fn ordinal(&self) -> u32 {
        self.month * 100 + self.day
    }

    /// Every valid month/day of a leap year, in calendar order.
    pub fn all() -> impl Iterator<Item = MonthDay> {
        (1..=12u32).flat_map(|month| {
            (1..=DAYS_IN_MONTH[(month - 1) as usize]).map(move |day| MonthDay { month, day })
        })
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// An inclusive month/day range. A start later in the year than the end wraps the new year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: MonthDay,
    pub end: MonthDay,
}

impl DateRange {
    pub fn new(start: MonthDay, end: MonthDay) -> Self {
        Self { start, end }
    }

    pub fn wraps_year(&self) -> bool {
        self.start.ordinal() > self.end.ordinal()
    }

    pub fn contains(&self, date: MonthDay) -> bool {
        let current = date.ordinal();
        let start = self.start.ordinal();
        let end = self.end.ordinal();

        if self.wraps_year() {
            current >= start || current <= end
        } else {
            current >= start && current <= end
        }
    }
}

/// Color for each semantic role. All roles are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub divider: String,
    pub text: String,
    pub link: String,
}

impl ThemeColors {
    pub fn roles(&self) -> [(&'static str, &str); 6] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("divider", &self.divider),
            ("text", &self.text),
            ("link", &self.link),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoKind {
    #[default]
    Standard,
    Themed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayPosition {
    Around,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl OverlayPosition {
    pub fn shows(&self, corner: IconPosition) -> bool {
        match self {
            OverlayPosition::Around => corner.is_corner(),
            OverlayPosition::TopLeft => corner == IconPosition::TopLeft,
            OverlayPosition::TopRight => corner == IconPosition::TopRight,
            OverlayPosition::BottomLeft => corner == IconPosition::BottomLeft,
            OverlayPosition::BottomRight => corner == IconPosition::BottomRight,
        }
    }
}

/// Embellishment drawn around the logo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoOverlay {
    pub position: OverlayPosition,
    /// Size of the embellished logo relative to the bare logo (1.2 = 20% larger).
    #[serde(default = "default_overlay_size")]
    pub size: f32,
}

fn default_overlay_size() -> f32 {
    1.0
}

/// Logo edge length in pixels for each layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogoSizes {
    pub full: u32,
    pub compact: u32,
}

impl Default for LogoSizes {
    fn default() -> Self {
        Self {
            full: 120,
            compact: 40,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoDescriptor {
    #[serde(default)]
    pub kind: LogoKind,

    /// Relative path or URL of the display image.
    pub image: String,

    /// Smaller mark for the compact layout; the display image is used when absent.
    #[serde(default)]
    pub symbol: Option<String>,

    /// Embedded image as a `data:` URI. Preferred over `image` when present.
    #[serde(default)]
    pub embedded: Option<String>,

    /// File holding the embedded image, read when a catalog is loaded from disk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedded_file: Option<PathBuf>,

    #[serde(default)]
    pub overlay: Option<LogoOverlay>,

    #[serde(default)]
    pub sizes: LogoSizes,
}

/// How the logo divider is drawn. Always a single `border-right` declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DividerStyle {
    Solid,
    Dotted,
    Thick,
}

impl DividerStyle {
    pub fn border(&self, color: &str) -> String {
        match self {
            DividerStyle::Solid => format!("border-right: 1px solid {};", color),
            DividerStyle::Dotted => format!("border-right: 1px dotted {};", color),
            DividerStyle::Thick => format!("border-right: 2px solid {};", color),
        }
    }
}

/// Where a decorative glyph goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconPosition {
    Before,
    After,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl IconPosition {
    pub fn is_corner(&self) -> bool {
        !matches!(self, IconPosition::Before | IconPosition::After)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Decorations {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub divider_style: Option<DividerStyle>,

    /// Glyphs are opaque strings; they are escaped like any other text.
    #[serde(default)]
    pub icons: BTreeMap<IconPosition, String>,
}

impl Decorations {
    pub fn icon(&self, position: IconPosition) -> Option<&str> {
        self.icons
            .get(&position)
            .map(String::as_str)
            .filter(|glyph| !glyph.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemeMessages {
    #[serde(default)]
    pub footer: Option<String>,
    #[serde(default)]
    pub greeting: Option<String>,
    #[serde(default)]
    pub signoff: Option<String>,
}

fn default_available() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeDefinition {
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default = "default_available")]
    pub available: bool,

    /// `None` marks the catalog's fallback theme.
    #[serde(default)]
    pub date_range: Option<DateRange>,

    pub colors: ThemeColors,

    pub logo: LogoDescriptor,

    #[serde(default)]
    pub decorations: Decorations,

    #[serde(default)]
    pub messages: ThemeMessages,
}

impl ThemeDefinition {
    /// Undated themes are always in season.
    pub fn in_season(&self, date: MonthDay) -> bool {
        self.date_range.map_or(true, |range| range.contains(date))
    }
}
