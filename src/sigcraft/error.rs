use crate::compose::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SigError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid theme catalog: {0}")]
    Catalog(String),

    #[error("No <table> element found in HTML")]
    NoTable,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, SigError>;
