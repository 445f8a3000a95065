use super::PreferenceStore;
use crate::error::Result;
use std::fs;
use std::io;
use std::path::PathBuf;

const PREFERENCES_FILENAME: &str = "preferences.json";

/// Preference blob stored as `preferences.json` under a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(PREFERENCES_FILENAME)
    }
}

impl PreferenceStore for FileStore {
    fn read_blob(&self) -> Result<Option<String>> {
        match fs::read_to_string(self.path()) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write_blob(&mut self, blob: &str) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.path(), blob)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        match fs::remove_file(self.path()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
