//! # CLI
//!
//! The command-line client for sigcraft. It is **one possible UI** over the library; everything
//! here is argument parsing, output formatting and process plumbing.
//!
//! ## Commands
//!
//! - `generate`, `copy`, `export`: render signatures from the contact flags (`--name`,
//!   `--title`, `--email`, `--mobile`, `--website`) and print, copy or save them.
//! - `themes`, `theme <id|auto>`, `decoration <level>`, `auto <on|off>`, `prefs`, `reset`:
//!   browse themes and manage the stored preferences.
//! - `config [key] [value]`: read or change `config.json`.
//!
//! The rendering commands accept `--theme`, `--level` and `--plain` as one-off overrides that
//! are never saved. `--date` stands in for today wherever the season matters.
//!
//! ## Module Structure
//!
//! - `commands`: Handlers that call the API and print results
//! - `render`: Template-ready views and the template renderer
//! - `setup`: Argument parsing via clap
//! - `styles`: Terminal styles
//! - `templates`: Output templates

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
