//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept in stand-alone files, which are
//! easier to edit and diff than format strings spread across handlers. They are included here as
//! string constants.
//!
//! Templates only arrange and style. Anything needing width arithmetic (padding columns, date
//! formatting) is computed in `render.rs` and handed over as plain strings, and every style goes
//! through the `style` filter by semantic name.
//!
//! Trim and lstrip of blocks are on, so a block tag on its own line leaves nothing behind.

pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const THEMES_TEMPLATE: &str = include_str!("templates/themes.tmp");
pub const PREFERENCES_TEMPLATE: &str = include_str!("templates/preferences.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");

pub const TEMPLATES: [(&str, &str); 4] = [
    ("messages", MESSAGES_TEMPLATE),
    ("themes", THEMES_TEMPLATE),
    ("preferences", PREFERENCES_TEMPLATE),
    ("config", CONFIG_TEMPLATE),
];
