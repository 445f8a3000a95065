use crate::compose::{ComposeSettings, DEFAULT_FONT};
use crate::error::Result;
use crate::model::Layout;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Tool configuration, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct SigConfig {
    /// Website shown when the contact has none (without scheme, e.g. `www.example.com`)
    #[serde(default = "default_website")]
    pub default_website: String,

    /// Country code that replaces a leading `0` in `tel:` links
    #[serde(default = "default_phone_prefix")]
    pub phone_prefix: String,

    #[serde(default = "default_logo_alt")]
    pub logo_alt: String,

    #[serde(default = "default_font")]
    pub body_font: String,

    #[serde(default = "default_font")]
    pub name_font: String,

    /// File name for exported new-email signatures
    #[serde(default = "default_full_filename")]
    pub full_filename: String,

    /// File name for exported reply signatures
    #[serde(default = "default_compact_filename")]
    pub compact_filename: String,

    /// Custom theme catalog; the built-in themes are used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,
}

fn default_website() -> String {
    "www.example.com".to_string()
}

fn default_phone_prefix() -> String {
    "+61".to_string()
}

fn default_logo_alt() -> String {
    "Company logo".to_string()
}

fn default_font() -> String {
    DEFAULT_FONT.to_string()
}

fn default_full_filename() -> String {
    "signature-new-email.html".to_string()
}

fn default_compact_filename() -> String {
    "signature-reply.html".to_string()
}

impl Default for SigConfig {
    fn default() -> Self {
        Self {
            default_website: default_website(),
            phone_prefix: default_phone_prefix(),
            logo_alt: default_logo_alt(),
            body_font: default_font(),
            name_font: default_font(),
            full_filename: default_full_filename(),
            compact_filename: default_compact_filename(),
            catalog: None,
        }
    }
}

impl SigConfig {
    pub const KEYS: [&'static str; 8] = [
        "default-website",
        "phone-prefix",
        "logo-alt",
        "body-font",
        "name-font",
        "full-filename",
        "compact-filename",
        "catalog",
    ];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "default-website" => self.default_website.clone(),
            "phone-prefix" => self.phone_prefix.clone(),
            "logo-alt" => self.logo_alt.clone(),
            "body-font" => self.body_font.clone(),
            "name-font" => self.name_font.clone(),
            "full-filename" => self.full_filename.clone(),
            "compact-filename" => self.compact_filename.clone(),
            "catalog" => self
                .catalog
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            _ => return None,
        };
        Some(value)
    }

    /// Sets a key from its string form. An empty `catalog` value unsets it.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        let required = |v: &str| {
            if v.is_empty() {
                Err(format!("{} cannot be empty", key))
            } else {
                Ok(v.to_string())
            }
        };

        match key {
            "default-website" => self.default_website = required(value)?,
            "phone-prefix" => self.phone_prefix = required(value)?,
            "logo-alt" => self.logo_alt = value.to_string(),
            "body-font" => self.body_font = required(value)?,
            "name-font" => self.name_font = required(value)?,
            "full-filename" => self.full_filename = required(value)?,
            "compact-filename" => self.compact_filename = required(value)?,
            "catalog" => {
                self.catalog = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            _ => {
                return Err(format!(
                    "Unknown config key: {}. Valid keys: {}",
                    key,
                    Self::KEYS.join(", ")
                ))
            }
        }
        Ok(())
    }

    /// All keys with their current values, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        Self::KEYS
            .iter()
            .map(|key| (*key, self.get(key).unwrap_or_default()))
            .collect()
    }

    pub fn filename(&self, layout: Layout) -> &str {
        match layout {
            Layout::Full => &self.full_filename,
            Layout::Compact => &self.compact_filename,
        }
    }

    pub fn compose_settings(&self) -> ComposeSettings {
        ComposeSettings {
            phone_prefix: self.phone_prefix.clone(),
            default_website: self.default_website.clone(),
            logo_alt: self.logo_alt.clone(),
            body_font: self.body_font.clone(),
            name_font: self.name_font.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SigConfig::default();
        assert_eq!(config.phone_prefix, "+61");
        assert_eq!(config.filename(Layout::Full), "signature-new-email.html");
        assert_eq!(config.filename(Layout::Compact), "signature-reply.html");
        assert_eq!(config.compose_settings(), ComposeSettings::default());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = SigConfig::load(dir.path().join("nowhere")).unwrap();
        assert_eq!(config, SigConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = SigConfig::default();
        config.set("phone-prefix", "+64").unwrap();
        config.set("catalog", "/tmp/themes.json").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = SigConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.phone_prefix, "+64");
        assert_eq!(loaded.catalog, Some(PathBuf::from("/tmp/themes.json")));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{ "default-website": "acme.test" }"#,
        )
        .unwrap();
        let loaded = SigConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.default_website, "acme.test");
        assert_eq!(loaded.logo_alt, "Company logo");
    }

    #[test]
    fn test_set_rejects_unknown_and_empty() {
        let mut config = SigConfig::default();
        assert!(config.set("colour", "red").is_err());
        assert!(config.set("phone-prefix", "  ").is_err());
        assert_eq!(config.phone_prefix, "+61");
    }

    #[test]
    fn test_empty_catalog_unsets() {
        let mut config = SigConfig::default();
        config.set("catalog", "themes.json").unwrap();
        config.set("catalog", "").unwrap();
        assert_eq!(config.catalog, None);
        assert_eq!(config.get("catalog").as_deref(), Some(""));
    }

    #[test]
    fn test_entries_cover_every_key() {
        let entries = SigConfig::default().entries();
        assert_eq!(entries.len(), SigConfig::KEYS.len());
        assert_eq!(entries[0], ("default-website", "www.example.com".to_string()));
    }
}
