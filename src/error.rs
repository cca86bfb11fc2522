//! Error types for extraction and crawling.

use thiserror::Error;

/// Errors raised while extracting data from a rendered document.
///
/// These never leave the content extractor: a failing extraction is turned
/// into a degraded [`NoticeRecord`](crate::results::NoticeRecord) instead.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A configured CSS selector could not be compiled
    #[error("invalid selector `{selector}`: {reason}")]
    InvalidSelector { selector: String, reason: String },
}

/// Errors that stop a crawl run.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// The configured base URL is not an absolute URL
    #[error("invalid base URL `{url}`: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Configuration failed validation
    #[error("invalid configuration: {0}")]
    Config(String),

    /// No WebDriver server accepted a session
    #[error("failed to connect to a WebDriver server at {url}")]
    WebDriver { url: String },

    /// The listing page could not be rendered
    #[error("failed to load listing page {url}")]
    ListingUnavailable { url: String },

    /// Writing an artifact failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing an artifact failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
