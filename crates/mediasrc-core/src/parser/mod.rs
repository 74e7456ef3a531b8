//! HTML parsers for media source URLs
//!
//! Contains modules for the rendered-video and static-iframe scans.

pub mod iframe;
pub mod video;

pub use iframe::parse_iframe_sources;
pub use video::parse_video_sources;

use scraper::{ElementRef, Selector};

use crate::error::{MediaSrcError, Result};

/// Builds a selector, mapping parse failures to `InvalidSelector`
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| MediaSrcError::InvalidSelector(format!("{css}: {e:?}")))
}

/// Reads the `src` attribute of every element, in iteration order
///
/// A missing attribute fails the whole scan. `position` in the error is
/// the zero-based index of the element among those scanned.
pub(crate) fn collect_src<'a, I>(elements: I, tag: &'static str) -> Result<Vec<String>>
where
    I: IntoIterator<Item = ElementRef<'a>>,
{
    elements
        .into_iter()
        .enumerate()
        .map(|(position, element)| {
            element
                .value()
                .attr("src")
                .map(str::to_string)
                .ok_or(MediaSrcError::MissingAttribute {
                    tag,
                    attribute: "src",
                    position,
                })
        })
        .collect()
}
