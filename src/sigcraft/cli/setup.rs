use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use sigcraft::api::ThemeOverrides;
use sigcraft::model::{ContactData, DecorationLevel, Layout};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sigcraft", bin_name = "sigcraft", version)]
#[command(
    about = "Email-client-safe HTML signatures with seasonal themes",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Day used for seasonal themes, YYYY-MM-DD (default: today)
    #[arg(long, global = true, value_name = "DATE", help_heading = "Options")]
    pub date: Option<NaiveDate>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render signature HTML to stdout
    #[command(alias = "g")]
    Generate {
        #[command(flatten)]
        contact: ContactArgs,

        #[command(flatten)]
        theme: ThemeArgs,

        /// Which layout to render
        #[arg(short, long, value_enum, default_value_t = LayoutChoice::Both)]
        layout: LayoutChoice,

        /// Print only the <table> fragment instead of the full document
        #[arg(long)]
        fragment: bool,
    },

    /// Copy a signature to the clipboard, ready to paste into a mail client
    Copy {
        #[command(flatten)]
        contact: ContactArgs,

        #[command(flatten)]
        theme: ThemeArgs,

        /// Which layout to copy; the clipboard holds one at a time
        #[arg(short, long, value_enum, default_value_t = SingleLayout::Full)]
        layout: SingleLayout,
    },

    /// Save signature documents as HTML files
    Export {
        #[command(flatten)]
        contact: ContactArgs,

        #[command(flatten)]
        theme: ThemeArgs,

        /// Which layouts to save
        #[arg(short, long, value_enum, default_value_t = LayoutChoice::Both)]
        layout: LayoutChoice,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// List the available themes
    Themes,

    /// Pin a theme, or `auto` to follow the season
    Theme {
        /// Theme id or `auto`
        id: String,
    },

    /// Set the decoration level: minimal, normal or festive
    Decoration {
        level: String,
    },

    /// Turn seasonal auto-detection on or off
    Auto {
        #[arg(value_enum)]
        state: Toggle,
    },

    /// Show theme preferences and what they resolve to
    Prefs,

    /// Reset theme preferences to defaults
    Reset,

    /// Get or set configuration values
    Config {
        /// Configuration key
        key: Option<String>,

        /// Value to set
        value: Option<String>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ContactArgs {
    /// Full name
    #[arg(long, default_value = "", hide_default_value = true)]
    pub name: String,

    /// Job title
    #[arg(long, default_value = "", hide_default_value = true)]
    pub title: String,

    /// Email address
    #[arg(long, default_value = "", hide_default_value = true)]
    pub email: String,

    /// Mobile number, local or international
    #[arg(long, default_value = "", hide_default_value = true)]
    pub mobile: String,

    /// Website (default: the configured default-website)
    #[arg(long)]
    pub website: Option<String>,
}

impl ContactArgs {
    pub fn into_contact(self) -> ContactData {
        let contact = ContactData::new(self.name, self.title, self.email, self.mobile);
        match self.website {
            Some(website) => contact.with_website(website),
            None => contact,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ThemeArgs {
    /// Theme id for this run, or `auto`
    #[arg(long)]
    pub theme: Option<String>,

    /// Decoration level for this run
    #[arg(long)]
    pub level: Option<DecorationLevel>,

    /// No theme, base branding only
    #[arg(long, conflicts_with_all = ["theme", "level"])]
    pub plain: bool,
}

impl ThemeArgs {
    pub fn into_overrides(self) -> ThemeOverrides {
        ThemeOverrides {
            theme: self.theme,
            level: self.level,
            plain: self.plain,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LayoutChoice {
    /// New-email layout
    Full,
    /// Reply layout
    Compact,
    Both,
}

impl LayoutChoice {
    /// An empty list means every layout.
    pub fn layouts(self) -> Vec<Layout> {
        match self {
            LayoutChoice::Full => vec![Layout::Full],
            LayoutChoice::Compact => vec![Layout::Compact],
            LayoutChoice::Both => Vec::new(),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SingleLayout {
    /// New-email layout
    Full,
    /// Reply layout
    Compact,
}

impl From<SingleLayout> for Layout {
    fn from(choice: SingleLayout) -> Self {
        match choice {
            SingleLayout::Full => Layout::Full,
            SingleLayout::Compact => Layout::Compact,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    pub fn enabled(self) -> bool {
        self == Toggle::On
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_with_overrides() {
        let cli = Cli::try_parse_from([
            "sigcraft",
            "generate",
            "--name",
            "Jane",
            "--level",
            "festive",
            "--theme",
            "christmas",
            "--date",
            "2025-12-01",
            "-l",
            "compact",
        ])
        .unwrap();

        assert_eq!(cli.date, NaiveDate::from_ymd_opt(2025, 12, 1));
        match cli.command {
            Commands::Generate {
                contact,
                theme,
                layout,
                fragment,
            } => {
                assert_eq!(contact.name, "Jane");
                assert_eq!(contact.email, "");
                assert_eq!(layout.layouts(), vec![Layout::Compact]);
                assert!(!fragment);
                let overrides = theme.into_overrides();
                assert_eq!(overrides.level, Some(DecorationLevel::Festive));
                assert_eq!(overrides.theme.as_deref(), Some("christmas"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_plain_conflicts_with_theme() {
        assert!(Cli::try_parse_from(["sigcraft", "copy", "--plain", "--theme", "x"]).is_err());
    }

    #[test]
    fn test_bad_level_is_rejected_at_parse_time() {
        let err = Cli::try_parse_from(["sigcraft", "generate", "--level", "loud"]).unwrap_err();
        assert!(err.to_string().contains("Invalid decoration level"));
    }

    #[test]
    fn test_copy_takes_a_single_layout() {
        let err = Cli::try_parse_from(["sigcraft", "copy", "-l", "both"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);

        let cli = Cli::try_parse_from(["sigcraft", "copy", "-l", "compact"]).unwrap();
        match cli.command {
            Commands::Copy { layout, .. } => assert_eq!(Layout::from(layout), Layout::Compact),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_auto_toggle() {
        let cli = Cli::try_parse_from(["sigcraft", "auto", "off"]).unwrap();
        assert!(matches!(cli.command, Commands::Auto { state: Toggle::Off }));
    }
}
