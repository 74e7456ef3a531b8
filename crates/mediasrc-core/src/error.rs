//! Error types for media source extraction
//!
//! Provides a single error enum with human-readable messages covering
//! the HTTP client, the browser engine and HTML attribute access.

use chromiumoxide::error::CdpError;
use thiserror::Error;

/// Error type for all extraction operations
#[derive(Error, Debug)]
pub enum MediaSrcError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Browser launch, navigation or capture failed
    #[error("Browser error: {0}")]
    BrowserError(#[from] CdpError),

    /// Browser launch options were rejected
    #[error("Invalid browser configuration: {0}")]
    BrowserConfig(String),

    /// A scanned element has no usable source attribute
    #[error("<{tag}> element #{position} has no `{attribute}` attribute")]
    MissingAttribute {
        tag: &'static str,
        attribute: &'static str,
        position: usize,
    },

    /// CSS selector could not be parsed
    #[error("Invalid CSS selector: {0}")]
    InvalidSelector(String),

    /// Content type is neither `video` nor `iframe`; carries the rejected value
    #[error("Invalid content type. Supported types: 'video', 'iframe'")]
    InvalidContentType(String),
}

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, MediaSrcError>;
