//! Signature HTML templates.
//!
//! Templates live in stand-alone files so the markup can be edited and diffed as HTML. They are
//! compiled into the binary as string constants.
//!
//! The table templates produce only the `<table>` fragment; `document.html` wraps a rendered
//! fragment (passed in as a safe value) in a standalone page. Keep it that way: the fragment a
//! user pastes and the document they download must come from one rendering.

pub const DOCUMENT_TEMPLATE: &str = include_str!("templates/document.html");
pub const FULL_TEMPLATE: &str = include_str!("templates/full.html");
pub const COMPACT_TEMPLATE: &str = include_str!("templates/compact.html");
pub const LOGO_TEMPLATE: &str = include_str!("templates/logo.html");

pub const TEMPLATES: [(&str, &str); 4] = [
    ("document.html", DOCUMENT_TEMPLATE),
    ("full.html", FULL_TEMPLATE),
    ("compact.html", COMPACT_TEMPLATE),
    ("logo.html", LOGO_TEMPLATE),
];
