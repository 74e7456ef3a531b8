//! Core data types for media source extraction
//!
//! Extracted URLs are plain `String`s taken verbatim from `src`
//! attributes, so the only domain type here is the kind of content
//! a caller asks for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MediaSrcError;

/// Kind of media URL to extract from a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// `<video>`/`<source>` URLs from the browser-rendered DOM
    Video,
    /// `<iframe>` URLs from the raw server HTML
    Iframe,
}

impl ContentType {
    /// Name accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Video => "video",
            ContentType::Iframe => "iframe",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = MediaSrcError;

    /// Matching is exact: `"Video"` is rejected like any other unknown value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "video" => Ok(ContentType::Video),
            "iframe" => Ok(ContentType::Iframe),
            other => Err(MediaSrcError::InvalidContentType(other.to_string())),
        }
    }
}
