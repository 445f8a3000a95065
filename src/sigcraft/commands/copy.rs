use crate::clipboard::{self, ClipboardFormat};
use crate::commands::{generate, CmdMessage, CmdResult, GenerateRequest};
use crate::compose::Composer;
use crate::error::Result;
use crate::model::Layout;
use crate::store::PreferenceStore;
use crate::theme::ThemeCatalog;

/// Renders one layout and puts its table fragment on the system clipboard.
pub fn run<S: PreferenceStore>(
    store: &S,
    catalog: &ThemeCatalog,
    composer: &Composer,
    request: &GenerateRequest,
) -> Result<CmdResult> {
    run_with(store, catalog, composer, request, clipboard::copy_html)
}

/// Same as [`run`] with an injectable clipboard writer.
pub fn run_with<S, F>(
    store: &S,
    catalog: &ThemeCatalog,
    composer: &Composer,
    request: &GenerateRequest,
    copy: F,
) -> Result<CmdResult>
where
    S: PreferenceStore,
    F: FnOnce(&str) -> Result<ClipboardFormat>,
{
    let layout = request.layouts.first().copied().unwrap_or(Layout::Full);
    let mut single = request.clone();
    single.layouts = vec![layout];

    let mut result = generate::run(store, catalog, composer, &single)?;
    let Some(signature) = result.signatures.first() else {
        return Ok(result);
    };

    let format = copy(&signature.fragment)?;
    let message = match format {
        ClipboardFormat::Html => CmdMessage::success(format!(
            "{} signature copied to clipboard",
            layout.label()
        )),
        ClipboardFormat::PlainText => CmdMessage::warning(format!(
            "{} signature copied as HTML source; paste it into your mail client's HTML editor",
            layout.label()
        )),
    };
    result.add_message(message);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::compose::ComposeSettings;
    use crate::error::SigError;
    use crate::model::ContactData;
    use crate::store::memory::InMemoryStore;
    use chrono::NaiveDate;
    use std::cell::RefCell;

    fn request(layouts: Vec<Layout>) -> GenerateRequest {
        GenerateRequest::new(
            ContactData::new("Jane Doe", "CTO", "jane@example.com", "0412 345 678"),
            layouts,
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
        )
    }

    fn composer() -> Composer {
        Composer::new(ComposeSettings::default()).unwrap()
    }

    #[test]
    fn test_copies_fragment_only() {
        let copied = RefCell::new(String::new());
        let res = run_with(
            &InMemoryStore::new(),
            &ThemeCatalog::builtin(),
            &composer(),
            &request(vec![Layout::Compact]),
            |html| {
                copied.replace(html.to_string());
                Ok(ClipboardFormat::Html)
            },
        )
        .unwrap();

        let copied = copied.into_inner();
        assert!(copied.starts_with("<table"));
        assert!(!copied.contains("<!DOCTYPE"));
        assert_eq!(res.signatures.len(), 1);
        assert_eq!(
            res.messages.last().unwrap().content,
            "Reply signature copied to clipboard"
        );
    }

    #[test]
    fn test_plain_text_fallback_is_a_warning() {
        let res = run_with(
            &InMemoryStore::new(),
            &ThemeCatalog::builtin(),
            &composer(),
            &request(vec![]),
            |_| Ok(ClipboardFormat::PlainText),
        )
        .unwrap();
        let last = res.messages.last().unwrap();
        assert_eq!(last.level, MessageLevel::Warning);
        assert!(last.content.starts_with("New email signature"));
    }

    #[test]
    fn test_clipboard_failure_propagates() {
        let res = run_with(
            &InMemoryStore::new(),
            &ThemeCatalog::builtin(),
            &composer(),
            &request(vec![Layout::Full]),
            |_| Err(SigError::Clipboard("no clipboard".into())),
        );
        assert!(matches!(res, Err(SigError::Clipboard(_))));
    }
}
