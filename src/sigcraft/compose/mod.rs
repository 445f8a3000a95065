//! # Signature Composition
//!
//! Turns contact data, a theme and a decoration intensity into email-client-safe HTML.
//!
//! Email clients strip `<style>` blocks, ignore most modern CSS and rewrite link colors, so the
//! output is deliberately old-fashioned: nested tables, inline styles on every cell, link colors
//! forced both inline and in a `!important` style block (with the `.ExternalClass` override that
//! Outlook needs).
//!
//! Rendering is a pure function of its inputs. A [`Composer`] holds the compiled templates and
//! the configured text settings; nothing else is consulted, so the same inputs give the same
//! bytes.
//!
//! Every [`Signature`] carries two views of one rendering:
//! - `fragment`: the bare `<table>` element, for pasting into a mail client.
//! - `document`: a standalone HTML page around that same table, for saving to disk.

use crate::error::Result;
use crate::model::{ContactData, Layout};
use crate::theme::catalog::standard_theme;
use crate::theme::{LogoDescriptor, ThemeColors, ThemeDefinition, ThemeProvider};
use minijinja::{context, Environment, Value};
use once_cell::sync::Lazy;
use serde::Serialize;

pub mod decorate;
pub mod extract;
pub mod format;
pub mod templates;
pub mod validate;

pub use decorate::{clamp_intensity, DecorationPlan, LogoGrid};
pub use extract::extract_table;
pub use format::{escape_html, tel_href, website_href};
pub use validate::{is_valid_email, looks_like_au_mobile, validate_contact, ValidationError};

/// Palette and logo used when composing without a theme.
static BASE_THEME: Lazy<ThemeDefinition> = Lazy::new(standard_theme);

pub const DEFAULT_FONT: &str = "Arial, Helvetica, sans-serif";

/// Text settings that are not part of a theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeSettings {
    /// Prepended to mobile numbers in `tel:` links.
    pub phone_prefix: String,
    /// Used when the contact has no website.
    pub default_website: String,
    pub logo_alt: String,
    pub body_font: String,
    pub name_font: String,
}

impl Default for ComposeSettings {
    fn default() -> Self {
        Self {
            phone_prefix: "+61".to_string(),
            default_website: "www.example.com".to_string(),
            logo_alt: "Company logo".to_string(),
            body_font: DEFAULT_FONT.to_string(),
            name_font: DEFAULT_FONT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Signature {
    pub layout: Layout,
    pub document: String,
    pub fragment: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
struct FontSizes {
    name: u32,
    title: u32,
    contact: u32,
}

struct LayoutMetrics {
    template: &'static str,
    spacing: u32,
    font_size: FontSizes,
}

impl LayoutMetrics {
    fn for_layout(layout: Layout) -> Self {
        match layout {
            Layout::Full => Self {
                template: "full.html",
                spacing: 15,
                font_size: FontSizes {
                    name: 16,
                    title: 14,
                    contact: 13,
                },
            },
            Layout::Compact => Self {
                template: "compact.html",
                spacing: 10,
                font_size: FontSizes {
                    name: 13,
                    title: 12,
                    contact: 12,
                },
            },
        }
    }
}

#[derive(Serialize)]
struct Fonts<'a> {
    body: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
struct LogoView<'a> {
    src: &'a str,
    alt: &'a str,
    size: u32,
}

#[derive(Serialize)]
struct ContactView<'a> {
    full_name: &'a str,
    job_title: &'a str,
    email: &'a str,
    mobile: &'a str,
    tel_href: String,
    website: &'a str,
    website_href: String,
}

#[derive(Serialize)]
struct SignatureView<'a> {
    fonts: Fonts<'a>,
    colors: &'a ThemeColors,
    logo: LogoView<'a>,
    spacing: u32,
    font_size: FontSizes,
    contact: ContactView<'a>,
    plan: &'a DecorationPlan,
    website_padding: u32,
}

/// Logo source: embedded data wins, then the compact symbol, then the display image.
fn logo_src(logo: &LogoDescriptor, layout: Layout) -> &str {
    let non_empty = |s: &&str| !s.trim().is_empty();

    if let Some(embedded) = logo.embedded.as_deref().filter(non_empty) {
        return embedded;
    }
    match layout {
        Layout::Compact => logo.symbol.as_deref().filter(non_empty).unwrap_or(&logo.image),
        Layout::Full => &logo.image,
    }
}

pub struct Composer {
    env: Environment<'static>,
    settings: ComposeSettings,
}

impl Composer {
    pub fn new(settings: ComposeSettings) -> Result<Self> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_formatter(format::html_formatter);

        for (name, source) in templates::TEMPLATES {
            env.add_template(name, source)?;
        }

        Ok(Self { env, settings })
    }

    /// Validates `contact` and renders it. `None` for the theme means the base palette with no
    /// decorations. `intensity` is clamped to `[0, 1]`.
    pub fn compose(
        &self,
        layout: Layout,
        contact: &ContactData,
        theme: Option<&ThemeDefinition>,
        intensity: f32,
    ) -> Result<Signature> {
        validate_contact(contact)?;

        let contact = contact.trimmed();
        let theme = theme.unwrap_or(&BASE_THEME);
        let metrics = LayoutMetrics::for_layout(layout);
        let logo_size = match layout {
            Layout::Full => theme.logo.sizes.full,
            Layout::Compact => theme.logo.sizes.compact,
        };

        let plan = DecorationPlan::new(layout, theme, intensity, logo_size);
        let website = contact
            .website
            .as_deref()
            .unwrap_or(self.settings.default_website.as_str());

        let view = SignatureView {
            fonts: Fonts {
                body: &self.settings.body_font,
                name: &self.settings.name_font,
            },
            colors: &theme.colors,
            logo: LogoView {
                src: logo_src(&theme.logo, layout),
                alt: &self.settings.logo_alt,
                size: logo_size,
            },
            spacing: metrics.spacing,
            font_size: metrics.font_size,
            contact: ContactView {
                full_name: &contact.full_name,
                job_title: &contact.job_title,
                email: &contact.email,
                mobile: &contact.mobile,
                tel_href: tel_href(&contact.mobile, &self.settings.phone_prefix),
                website,
                website_href: website_href(website),
            },
            plan: &plan,
            website_padding: if plan.footer.is_some() { 10 } else { 15 },
        };

        let fragment = self.env.get_template(metrics.template)?.render(&view)?;
        let document = self.env.get_template("document.html")?.render(context! {
            colors => &theme.colors,
            fonts => &view.fonts,
            table => Value::from_safe_string(fragment.clone()),
        })?;

        debug_assert_eq!(extract_table(&document), Some(fragment.as_str()));

        tracing::debug!(layout = %layout, theme = %theme.id, "signature composed");

        Ok(Signature {
            layout,
            document,
            fragment,
        })
    }

    /// Renders with whatever theme and intensity the provider reports.
    pub fn compose_with(
        &self,
        layout: Layout,
        contact: &ContactData,
        provider: &dyn ThemeProvider,
    ) -> Result<Signature> {
        self.compose(
            layout,
            contact,
            Some(provider.current_theme()),
            provider.decoration_intensity(),
        )
    }
}

/// One-off composition with default settings.
pub fn compose_signature(
    layout: Layout,
    contact: &ContactData,
    theme: Option<&ThemeDefinition>,
    intensity: f32,
) -> Result<Signature> {
    Composer::new(ComposeSettings::default())?.compose(layout, contact, theme, intensity)
}
