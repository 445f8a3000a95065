use crate::model::{ContactData, ContactField};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Australian mobile numbers as typed: `04` followed by eight digits, spaces ignored.
static AU_MOBILE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^04\d{8}$").expect("mobile pattern is a valid regex"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required fields: {}", field_list(.0))]
    MissingFields(Vec<ContactField>),

    #[error("Invalid email address format: {0}")]
    InvalidEmail(String),
}

impl ValidationError {
    pub fn missing_fields(&self) -> &[ContactField] {
        match self {
            ValidationError::MissingFields(fields) => fields,
            ValidationError::InvalidEmail(_) => &[],
        }
    }
}

fn field_list(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(ContactField::name)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Whether the number looks like an Australian mobile. Informational only; never enforced.
pub fn looks_like_au_mobile(mobile: &str) -> bool {
    let compact: String = mobile.chars().filter(|c| !c.is_whitespace()).collect();
    AU_MOBILE_RE.is_match(&compact)
}

/// Checks the required fields, reporting every missing one at once. The email format is only
/// checked once nothing is missing.
pub fn validate_contact(contact: &ContactData) -> Result<(), ValidationError> {
    let missing: Vec<ContactField> = ContactField::REQUIRED
        .into_iter()
        .filter(|field| contact.value(*field).trim().is_empty())
        .collect();

    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    let email = contact.email.trim();
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail(email.to_string()));
    }

    if !looks_like_au_mobile(&contact.mobile) {
        tracing::debug!(mobile = %contact.mobile, "mobile number is not in the 04xx xxx xxx form");
    }

    Ok(())
}
