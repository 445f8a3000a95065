//! # Sigcraft Architecture
//!
//! Sigcraft is a **UI-agnostic email signature library**. It turns a handful of contact fields
//! into table-based, inline-styled HTML that survives email-client rendering engines, and it
//! dresses that HTML in seasonal themes. The bundled CLI is one client of the library; a web or
//! desktop front end would sit at the same level.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders terminal output                │
//! │  - Clipboard and file output, exit codes                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the catalog, config and preference store            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Generate, export, theme listing, preference changes      │
//! │  - Returns `CmdResult`, never prints                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (theme/, compose/)                                    │
//! │  - Theme resolution: pure functions over a catalog          │
//! │  - Signature composition: pure, deterministic rendering     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Core
//!
//! Two pieces carry the actual logic:
//!
//! 1. [`theme::resolver`] picks the theme in force. Seasonal themes declare a month/day range
//!    that may wrap the year boundary; the first available theme (in catalog order) whose range
//!    contains the date wins, and the single undated theme is the fallback. Bad theme ids are a
//!    configuration condition: they are logged and replaced by the fallback.
//!
//! 2. [`compose`] renders a signature for a layout (`full` for new mail, `compact` for replies)
//!    from contact data, a theme and a decoration intensity in `[0, 1]`. Optional decorations
//!    (greeting, footer, icons, divider styles, logo embellishment) each have an activation
//!    threshold and are either rendered whole or not at all.
//!
//! Both are pure: the same inputs always produce the same bytes.
//!
//! ## Persistence
//!
//! Only two small JSON files exist: the user's theme preferences (see [`store`]) and the tool
//! configuration (see [`config`]). Both degrade to defaults when missing; broken preference data
//! is never a hard failure.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`compose`]: Validation, formatting and HTML composition
//! - [`theme`]: Theme definitions, catalog and resolver
//! - [`model`]: Contact data, layouts, decoration levels, preferences
//! - [`store`]: Preference blob storage
//! - [`config`]: Configuration management
//! - [`clipboard`]: Cross-platform clipboard support
//! - [`error`]: Error types
//! - `cli`: Argument parsing and terminal rendering for the binary (not part of the lib API)

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod compose;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
pub mod theme;
