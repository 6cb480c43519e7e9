use stanza_export::ExportError;
use stanza_model::{Field, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to fetch {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid base URL {href}: {source}")]
    InvalidUrl {
        href: String,
        #[source]
        source: url::ParseError,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("no links found matching class \"{marker}\"")]
    NoLinks { marker: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected exactly one element for field {field} (class \"{marker}\"), found {found}")]
pub struct ExtractionError {
    pub field: Field,
    pub marker: String,
    pub found: usize,
}

/// Any failure that ends a harvest run.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("{url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: ParseError,
    },

    #[error("{url}: {source}")]
    Extraction {
        url: String,
        #[source]
        source: ExtractionError,
    },

    #[error("{url}: {source}")]
    Validation {
        url: String,
        #[source]
        source: ValidationError,
    },

    #[error(transparent)]
    Export(#[from] ExportError),
}
