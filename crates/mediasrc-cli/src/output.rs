//! Standard output formatting for extracted URLs

use mediasrc_core::ContentType;

/// Render extracted URLs the way each content type prints them
///
/// `video` prints one line holding a JSON array of strings. `iframe`
/// prints one URL per line and nothing at all for an empty result.
pub fn format_sources(content_type: ContentType, sources: &[String]) -> serde_json::Result<String> {
    match content_type {
        ContentType::Video => Ok(format!("{}\n", serde_json::to_string(sources)?)),
        ContentType::Iframe => Ok(sources.iter().map(|src| format!("{src}\n")).collect()),
    }
}
