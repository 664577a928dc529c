//! Error type shared by the configuration and rendering layers.

use thiserror::Error;

/// Errors raised while resolving configuration or serialising documents.
///
/// Generators themselves do not fail: unreadable artifacts fall back to a
/// supplied date and missing optional JSON-LD fields are omitted.
#[derive(Debug, Error)]
pub enum SeoError {
    #[error("invalid site url {value:?}: {source}")]
    InvalidSiteUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("site url {0:?} must use http or https")]
    UnsupportedScheme(String),

    #[error("unknown document {0:?}")]
    UnknownDocument(String),

    #[error("unknown page {0:?}")]
    UnknownPage(String),

    #[error("invalid listen address {value:?}: {source}")]
    InvalidListenAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("json-ld serialisation failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SeoError>;
