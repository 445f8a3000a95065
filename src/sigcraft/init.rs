use crate::api::SigApi;
use crate::commands::SigPaths;
use crate::config::SigConfig;
use crate::error::{Result, SigError};
use crate::store::fs::FileStore;
use crate::theme::ThemeCatalog;
use directories::ProjectDirs;
use std::env;
use std::path::{Path, PathBuf};

/// Overrides the configuration directory.
pub const HOME_ENV: &str = "SIGCRAFT_HOME";

pub struct SigContext {
    pub api: SigApi<FileStore>,
}

/// `$SIGCRAFT_HOME` when set and non-empty, otherwise the platform config directory.
pub fn config_dir() -> Result<PathBuf> {
    if let Some(home) = env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }

    ProjectDirs::from("com", "sigcraft", "sigcraft")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| SigError::Api("Could not determine config dir".to_string()))
}

/// The configured catalog, or the built-in one. Relative paths are taken from the config dir.
pub fn load_catalog(config: &SigConfig, config_dir: &Path) -> Result<ThemeCatalog> {
    match &config.catalog {
        Some(path) => {
            let path = if path.is_relative() {
                config_dir.join(path)
            } else {
                path.clone()
            };
            ThemeCatalog::load(&path).map_err(|e| match e {
                SigError::Catalog(msg) => SigError::Catalog(format!("{}: {}", path.display(), msg)),
                other => SigError::Catalog(format!("{}: {}", path.display(), other)),
            })
        }
        None => Ok(ThemeCatalog::builtin()),
    }
}

pub fn initialize() -> Result<SigContext> {
    let dir = config_dir()?;
    initialize_at(&dir)
}

pub fn initialize_at(config_dir: &Path) -> Result<SigContext> {
    let config = SigConfig::load(config_dir).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config.json is unreadable, using defaults");
        SigConfig::default()
    });
    let catalog = load_catalog(&config, config_dir)?;

    tracing::debug!(
        config_dir = %config_dir.display(),
        themes = catalog.len(),
        "initialized"
    );

    let store = FileStore::new(config_dir);
    let paths = SigPaths {
        config_dir: config_dir.to_path_buf(),
    };
    let api = SigApi::new(store, catalog, config, paths)?;

    Ok(SigContext { api })
}
