//! # Preference Storage
//!
//! The only user state sigcraft keeps is one small preference blob (theme, decoration level,
//! auto-detect). [`PreferenceStore`] abstracts where that blob lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: `preferences.json` in the config directory
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! Backends only move raw strings. Parsing happens once, in [`load_preferences`], which is also
//! where absent or corrupt data turns into defaults. A broken blob is logged and ignored; it never
//! stops a signature from being generated.

use crate::error::Result;
use crate::model::SignaturePreferences;

pub mod fs;
pub mod memory;

pub trait PreferenceStore {
    /// The stored blob, or `None` when nothing has been saved.
    fn read_blob(&self) -> Result<Option<String>>;

    /// Replaces the stored blob.
    fn write_blob(&mut self, blob: &str) -> Result<()>;

    /// Removes the stored blob so the next read yields defaults.
    fn clear(&mut self) -> Result<()>;
}

/// Reads preferences, falling back to defaults when the blob is missing, unreadable or corrupt.
pub fn load_preferences<S: PreferenceStore + ?Sized>(store: &S) -> SignaturePreferences {
    let blob = match store.read_blob() {
        Ok(Some(blob)) => blob,
        Ok(None) => return SignaturePreferences::default(),
        Err(e) => {
            tracing::warn!(error = %e, "could not read preferences, using defaults");
            return SignaturePreferences::default();
        }
    };

    match serde_json::from_str(&blob) {
        Ok(prefs) => prefs,
        Err(e) => {
            tracing::warn!(error = %e, "stored preferences are corrupt, using defaults");
            SignaturePreferences::default()
        }
    }
}

/// Overwrites the stored preferences.
pub fn save_preferences<S: PreferenceStore + ?Sized>(
    store: &mut S,
    prefs: &SignaturePreferences,
) -> Result<()> {
    let blob = serde_json::to_string_pretty(prefs)?;
    store.write_blob(&blob)
}
