//! Text formatting for signature output.

use minijinja::{Error, ErrorKind, Output, State, Value};
use std::fmt::Write;

/// Escapes the five HTML-significant characters and nothing else.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Builds the `tel:` target: one leading `0` replaced by `prefix`, all whitespace removed.
/// Numbers that already carry a `+` country code keep it.
pub fn tel_href(mobile: &str, prefix: &str) -> String {
    let mobile = mobile.trim();
    let digits: String = mobile.strip_prefix('0').unwrap_or(mobile).to_string();
    let compact: String = digits.chars().filter(|c| !c.is_whitespace()).collect();

    if mobile.starts_with('+') {
        compact
    } else {
        format!("{}{}", prefix, compact)
    }
}

/// Link target for a website: bare hosts get `https://`.
pub fn website_href(website: &str) -> String {
    let website = website.trim();
    let lower = website.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        website.to_string()
    } else {
        format!("https://{}", website)
    }
}

/// Template formatter: every interpolated value is escaped with [`escape_html`] unless it was
/// explicitly marked safe. Undefined and `none` render as nothing.
pub(crate) fn html_formatter(
    out: &mut Output<'_>,
    _state: &State<'_, '_>,
    value: &Value,
) -> Result<(), Error> {
    if value.is_undefined() || value.is_none() {
        return Ok(());
    }

    let result = if value.is_safe() {
        write!(out, "{}", value)
    } else if let Some(s) = value.as_str() {
        out.write_str(&escape_html(s))
    } else {
        out.write_str(&escape_html(&value.to_string()))
    };

    result.map_err(|e| Error::new(ErrorKind::WriteFailure, "failed to write output").with_source(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_five_characters() {
        assert_eq!(
            escape_html(r#"O'Brien & "Co" <x>"#),
            "O&#39;Brien &amp; &quot;Co&quot; &lt;x&gt;"
        );
    }

    #[test]
    fn test_escape_leaves_other_text_alone() {
        assert_eq!(escape_html("a/b = c • ✨"), "a/b = c • ✨");
    }

    #[test]
    fn test_tel_href_australian_mobile() {
        assert_eq!(tel_href("0412 345 678", "+61"), "+61412345678");
    }

    #[test]
    fn test_tel_href_strips_one_zero_only() {
        assert_eq!(tel_href("00 11", "+61"), "+61011");
    }

    #[test]
    fn test_tel_href_keeps_own_country_code() {
        assert_eq!(tel_href("+44 20 7946 0958", "+61"), "+442079460958");
    }

    #[test]
    fn test_website_href() {
        assert_eq!(website_href("www.example.com"), "https://www.example.com");
        assert_eq!(website_href("http://example.com"), "http://example.com");
        assert_eq!(website_href("HTTPS://example.com"), "HTTPS://example.com");
    }
}
