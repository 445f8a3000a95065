//! # CLI Layer
//!
//! This module is **one possible UI client** for sigcraft, not the application itself.
//!
//! It is the only place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the log subscriber
//! - Picks "today" for seasonal resolution
//! - Decides exit codes
//!
//! Handlers convert arguments into API calls and print what comes back. Signature HTML goes to
//! stdout untouched so it can be piped or redirected; status messages from `generate` go to
//! stderr for the same reason.

use super::render::Renderer;
use super::setup::{Cli, Commands, ContactArgs, LayoutChoice, ThemeArgs};
use chrono::{Local, NaiveDate};
use clap::Parser;
use sigcraft::api::{CmdMessage, SigApi};
use sigcraft::commands::config::ConfigAction;
use sigcraft::commands::{CmdResult, GenerateRequest};
use sigcraft::error::Result;
use sigcraft::init::initialize;
use sigcraft::store::fs::FileStore;
use std::path::Path;
use std::process;
use tracing_subscriber::EnvFilter;

struct AppContext {
    api: SigApi<FileStore>,
    date: NaiveDate,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = initialize()?;
    let mut app = AppContext {
        api: ctx.api,
        date: cli.date.unwrap_or_else(|| Local::now().date_naive()),
    };

    let result = match cli.command {
        Commands::Generate {
            contact,
            theme,
            layout,
            fragment,
        } => handle_generate(&app, contact, theme, layout, fragment)?,
        Commands::Copy {
            contact,
            theme,
            layout,
        } => {
            let request =
                GenerateRequest::new(contact.into_contact(), vec![layout.into()], app.date)
                    .with_overrides(theme.into_overrides());
            app.api.copy(&request)?
        }
        Commands::Export {
            contact,
            theme,
            layout,
            dir,
        } => handle_export(&app, contact, theme, layout, &dir)?,
        Commands::Themes => handle_themes(&app)?,
        Commands::Theme { id } => app.api.set_theme(&id, &app.date)?,
        Commands::Decoration { level } => app.api.set_decoration_level(&level, &app.date)?,
        Commands::Auto { state } => app.api.set_auto_detect(state.enabled(), &app.date)?,
        Commands::Prefs => handle_prefs(&app)?,
        Commands::Reset => app.api.reset_preferences(&app.date)?,
        Commands::Config { key, value } => handle_config(&mut app, key, value)?,
    };

    print_messages(&result.messages, false)?;
    if result.has_errors() {
        process::exit(1);
    }
    Ok(())
}

/// `RUST_LOG` wins unless `--verbose` asks for debug output.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("sigcraft=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn build_request(
    app: &AppContext,
    contact: ContactArgs,
    theme: ThemeArgs,
    layout: LayoutChoice,
) -> GenerateRequest {
    GenerateRequest::new(contact.into_contact(), layout.layouts(), app.date)
        .with_overrides(theme.into_overrides())
}

fn handle_generate(
    app: &AppContext,
    contact: ContactArgs,
    theme: ThemeArgs,
    layout: LayoutChoice,
    fragment: bool,
) -> Result<CmdResult> {
    let request = build_request(app, contact, theme, layout);
    let mut result = app.api.generate(&request)?;

    for signature in &result.signatures {
        if fragment {
            println!("{}", signature.fragment);
        } else {
            println!("{}", signature.document);
        }
    }

    print_messages(&result.messages, true)?;
    result.messages.clear();
    Ok(result)
}

fn handle_export(
    app: &AppContext,
    contact: ContactArgs,
    theme: ThemeArgs,
    layout: LayoutChoice,
    dir: &Path,
) -> Result<CmdResult> {
    let request = build_request(app, contact, theme, layout);
    app.api.export(&request, dir)
}

fn handle_themes(app: &AppContext) -> Result<CmdResult> {
    let result = app.api.list_themes(&app.date)?;
    let renderer = Renderer::new(console::colors_enabled())?;
    println!("{}", renderer.themes(&result.themes)?);
    Ok(result)
}

fn handle_prefs(app: &AppContext) -> Result<CmdResult> {
    let result = app.api.show_preferences(&app.date)?;
    if let Some(view) = &result.preferences {
        let renderer = Renderer::new(console::colors_enabled())?;
        println!("{}", renderer.preferences(view)?);
    }
    Ok(result)
}

fn handle_config(
    app: &mut AppContext,
    key: Option<String>,
    value: Option<String>,
) -> Result<CmdResult> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = app.api.config_action(action)?;
    if show_all {
        if let Some(config) = &result.config {
            let renderer = Renderer::new(console::colors_enabled())?;
            println!("{}", renderer.config(config)?);
        }
    }
    Ok(result)
}

fn print_messages(messages: &[CmdMessage], to_stderr: bool) -> Result<()> {
    if messages.is_empty() {
        return Ok(());
    }

    if to_stderr {
        let rendered = Renderer::new(console::colors_enabled_stderr())?.messages(messages)?;
        eprintln!("{}", rendered);
    } else {
        let rendered = Renderer::new(console::colors_enabled())?.messages(messages)?;
        println!("{}", rendered);
    }
    Ok(())
}
