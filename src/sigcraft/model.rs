use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Contact fields a signature is built from.
///
/// All fields are plain text as typed by the user. They are validated by
/// [`crate::compose::validate_contact`] and escaped on output; nothing here is trusted markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactData {
    pub full_name: String,
    pub job_title: String,
    pub email: String,
    pub mobile: String,
    /// Falls back to the configured default website when absent or blank.
    #[serde(default)]
    pub website: Option<String>,
}

impl ContactData {
    pub fn new(
        full_name: impl Into<String>,
        job_title: impl Into<String>,
        email: impl Into<String>,
        mobile: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            job_title: job_title.into(),
            email: email.into(),
            mobile: mobile.into(),
            website: None,
        }
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::FullName => &self.full_name,
            ContactField::JobTitle => &self.job_title,
            ContactField::Email => &self.email,
            ContactField::Mobile => &self.mobile,
            ContactField::Website => self.website.as_deref().unwrap_or(""),
        }
    }

    /// Copy with surrounding whitespace removed; a blank website becomes `None`.
    pub fn trimmed(&self) -> Self {
        Self {
            full_name: self.full_name.trim().to_string(),
            job_title: self.job_title.trim().to_string(),
            email: self.email.trim().to_string(),
            mobile: self.mobile.trim().to_string(),
            website: self
                .website
                .as_deref()
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FullName,
    JobTitle,
    Email,
    Mobile,
    Website,
}

impl ContactField {
    pub const REQUIRED: [ContactField; 4] = [
        ContactField::FullName,
        ContactField::JobTitle,
        ContactField::Email,
        ContactField::Mobile,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ContactField::FullName => "fullName",
            ContactField::JobTitle => "jobTitle",
            ContactField::Email => "email",
            ContactField::Mobile => "mobile",
            ContactField::Website => "website",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Signature layout variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Multi-line signature for new outgoing mail, includes the website.
    Full,
    /// Three-line signature for reply threads.
    Compact,
}

impl Layout {
    pub const ALL: [Layout; 2] = [Layout::Full, Layout::Compact];

    pub fn name(&self) -> &'static str {
        match self {
            Layout::Full => "full",
            Layout::Compact => "compact",
        }
    }

    /// Human label used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            Layout::Full => "New email",
            Layout::Compact => "Reply",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" | "new" => Ok(Layout::Full),
            "compact" | "reply" => Ok(Layout::Compact),
            other => Err(format!(
                "Unknown layout '{}'. Valid layouts: full, compact",
                other
            )),
        }
    }
}

/// Named decoration levels and their intensities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecorationLevel {
    Minimal,
    #[default]
    Normal,
    Festive,
}

impl DecorationLevel {
    pub fn intensity(&self) -> f32 {
        match self {
            DecorationLevel::Minimal => 0.3,
            DecorationLevel::Normal => 0.6,
            DecorationLevel::Festive => 1.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DecorationLevel::Minimal => "minimal",
            DecorationLevel::Normal => "normal",
            DecorationLevel::Festive => "festive",
        }
    }

    /// Lookup by stored name. Only the exact lower-case names match; anything else is
    /// `Normal`. User input goes through `FromStr`, which is forgiving about case.
    pub fn from_name_or_default(name: &str) -> Self {
        match name {
            "minimal" => DecorationLevel::Minimal,
            "festive" => DecorationLevel::Festive,
            _ => DecorationLevel::Normal,
        }
    }
}

impl fmt::Display for DecorationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DecorationLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(DecorationLevel::Minimal),
            "normal" => Ok(DecorationLevel::Normal),
            "festive" => Ok(DecorationLevel::Festive),
            other => Err(format!(
                "Invalid decoration level: {}. Valid levels: minimal, normal, festive",
                other
            )),
        }
    }
}

pub const AUTO_THEME: &str = "auto";

/// The persisted preference blob.
///
/// Field names are camelCase on disk. Every field has a default so partially written or older
/// blobs still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignaturePreferences {
    #[serde(default)]
    pub theme_id: Option<String>,

    #[serde(default = "default_level_name")]
    pub decoration_level: String,

    #[serde(default = "default_auto_detect")]
    pub auto_detect: bool,
}

fn default_level_name() -> String {
    DecorationLevel::default().name().to_string()
}

fn default_auto_detect() -> bool {
    true
}

impl Default for SignaturePreferences {
    fn default() -> Self {
        Self {
            theme_id: None,
            decoration_level: default_level_name(),
            auto_detect: default_auto_detect(),
        }
    }
}

impl SignaturePreferences {
    pub fn decoration_level(&self) -> DecorationLevel {
        DecorationLevel::from_name_or_default(&self.decoration_level)
    }

    /// The explicitly chosen theme, if any. `"auto"` and blank ids count as none.
    pub fn explicit_theme(&self) -> Option<&str> {
        self.theme_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty() && *id != AUTO_THEME)
    }
}
