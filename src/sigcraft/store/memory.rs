use super::PreferenceStore;
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    blob: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for InMemoryStore {
    fn read_blob(&self) -> Result<Option<String>> {
        Ok(self.blob.clone())
    }

    fn write_blob(&mut self, blob: &str) -> Result<()> {
        self.blob = Some(blob.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.blob = None;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::SignaturePreferences;
    use crate::store::save_preferences;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Explicit theme with auto-detect off.
        pub fn with_theme(mut self, theme_id: &str) -> Self {
            let prefs = SignaturePreferences {
                theme_id: Some(theme_id.to_string()),
                auto_detect: false,
                ..Default::default()
            };
            save_preferences(&mut self.store, &prefs).unwrap();
            self
        }

        pub fn with_level(mut self, level: &str) -> Self {
            let mut prefs = crate::store::load_preferences(&self.store);
            prefs.decoration_level = level.to_string();
            save_preferences(&mut self.store, &prefs).unwrap();
            self
        }

        pub fn with_raw_blob(mut self, blob: &str) -> Self {
            self.store.write_blob(blob).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use crate::store::load_preferences;

    #[test]
    fn test_clear_forgets_blob() {
        let mut store = InMemoryStore::new();
        store.write_blob("{}").unwrap();
        store.clear().unwrap();
        assert_eq!(store.read_blob().unwrap(), None);
    }

    #[test]
    fn test_fixtures() {
        let fixture = StoreFixture::default()
            .with_theme("christmas")
            .with_level("festive");
        let prefs = load_preferences(&fixture.store);
        assert_eq!(prefs.explicit_theme(), Some("christmas"));
        assert_eq!(prefs.decoration_level, "festive");
        assert!(!prefs.auto_detect);

        let broken = StoreFixture::new().with_raw_blob("][");
        assert!(load_preferences(&broken.store).auto_detect);
    }
}
