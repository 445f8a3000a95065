use crate::commands::{generate, CmdMessage, CmdResult, GenerateRequest};
use crate::compose::Composer;
use crate::config::SigConfig;
use crate::error::{Result, SigError};
use crate::store::PreferenceStore;
use crate::theme::ThemeCatalog;
use std::fs;
use std::path::{Path, PathBuf};

/// Writes one HTML document. Empty content or an empty file name is refused.
pub fn write_document(dir: &Path, filename: &str, html: &str) -> Result<PathBuf> {
    if html.trim().is_empty() {
        return Err(SigError::Api("No HTML content to download".to_string()));
    }
    let filename = filename.trim();
    if filename.is_empty() {
        return Err(SigError::Api("Filename is required".to_string()));
    }

    fs::create_dir_all(dir)?;
    let path = dir.join(filename);
    fs::write(&path, html)?;
    Ok(path)
}

/// Renders the requested layouts and saves each full document under its configured file name.
pub fn run<S: PreferenceStore>(
    store: &S,
    catalog: &ThemeCatalog,
    composer: &Composer,
    config: &SigConfig,
    request: &GenerateRequest,
    dir: &Path,
) -> Result<CmdResult> {
    let mut result = generate::run(store, catalog, composer, request)?;
    let mut written = Vec::with_capacity(result.signatures.len());

    for signature in &result.signatures {
        let path = write_document(dir, config.filename(signature.layout), &signature.document)?;
        written.push(path);
    }

    for (signature, path) in result.signatures.iter().zip(&written) {
        result.messages.push(CmdMessage::success(format!(
            "{} signature saved to {}",
            signature.layout.label(),
            path.display()
        )));
    }

    Ok(result.with_written_paths(written))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::ComposeSettings;
    use crate::model::{ContactData, Layout};
    use crate::store::memory::InMemoryStore;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn request(layouts: Vec<Layout>) -> GenerateRequest {
        GenerateRequest::new(
            ContactData::new("Jane Doe", "CTO", "jane@example.com", "0412 345 678"),
            layouts,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        )
    }

    #[test]
    fn test_write_document_rejects_empty_input() {
        let dir = TempDir::new().unwrap();
        assert!(write_document(dir.path(), "a.html", "  ").is_err());
        assert!(write_document(dir.path(), "", "<table></table>").is_err());
    }

    #[test]
    fn test_exports_both_layouts_with_configured_names() {
        let dir = TempDir::new().unwrap();
        let mut config = SigConfig::default();
        config.set("compact-filename", "reply.html").unwrap();
        let composer = Composer::new(config.compose_settings()).unwrap();

        let res = run(
            &InMemoryStore::new(),
            &ThemeCatalog::builtin(),
            &composer,
            &config,
            &request(vec![]),
            dir.path(),
        )
        .unwrap();

        assert_eq!(res.written_paths.len(), 2);
        let full = std::fs::read_to_string(dir.path().join("signature-new-email.html")).unwrap();
        assert!(full.starts_with("<!DOCTYPE html>"));
        assert!(dir.path().join("reply.html").exists());
        assert!(res
            .messages
            .iter()
            .any(|m| m.content.starts_with("Reply signature saved to")));
    }

    #[test]
    fn test_invalid_contact_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut req = request(vec![Layout::Full]);
        req.contact.mobile.clear();
        let composer = Composer::new(ComposeSettings::default()).unwrap();

        let res = run(
            &InMemoryStore::new(),
            &ThemeCatalog::builtin(),
            &composer,
            &SigConfig::default(),
            &req,
            dir.path(),
        );
        assert!(res.is_err());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
