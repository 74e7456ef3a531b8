//! Video source parser for browser-rendered pages
//!
//! Scans `<source>` elements nested in `<video>` players and falls back
//! to every `<source>` in the document when no player yields a URL.

use scraper::Html;
use tracing::debug;

use super::{collect_src, selector};
use crate::error::Result;

/// Parses rendered HTML and returns video source URLs
///
/// # Arguments
/// * `html` - Rendered HTML captured from the browser
///
/// # Returns
/// `src` values of `<source>` elements inside `<video>` elements, in
/// document order. When that scan is empty, the `src` values of all
/// `<source>` elements in the document instead. Empty vec if neither
/// scan finds anything.
///
/// # Errors
/// Returns `MissingAttribute` if a scanned `<source>` has no `src`
pub fn parse_video_sources(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let video_selector = selector("video")?;
    let source_selector = selector("source")?;

    let nested = document
        .select(&video_selector)
        .flat_map(|video| video.select(&source_selector));
    let sources = collect_src(nested, "source")?;

    if !sources.is_empty() {
        debug!(count = sources.len(), "Collected sources from <video> elements");
        return Ok(sources);
    }

    let sources = collect_src(document.select(&source_selector), "source")?;
    debug!(count = sources.len(), "Collected sources from document-wide <source> scan");
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MediaSrcError;
    use proptest::prelude::*;

    #[test]
    fn test_parse_empty_html() {
        let html = "<html><body></body></html>";
        let sources = parse_video_sources(html).unwrap();
        assert!(sources.is_empty());
    }

    #[test]
    fn test_parse_single_video_multiple_sources() {
        let html = r#"
        <html>
        <body>
            <video controls>
                <source src="https://cdn.example.com/a-1080.mp4" type="video/mp4">
                <source src="https://cdn.example.com/a-720.webm" type="video/webm">
            </video>
        </body>
        </html>
        "#;

        let sources = parse_video_sources(html).unwrap();
        assert_eq!(
            sources,
            vec![
                "https://cdn.example.com/a-1080.mp4",
                "https://cdn.example.com/a-720.webm",
            ]
        );
    }

    #[test]
    fn test_parse_sources_follow_document_order_across_videos() {
        let html = r#"
        <html>
        <body>
            <div class="player">
                <video><source src="/first.mp4"></video>
            </div>
            <p>between players</p>
            <video>
                <source src="/second.mp4">
                <source src="/third.mp4">
            </video>
        </body>
        </html>
        "#;

        let sources = parse_video_sources(html).unwrap();
        assert_eq!(sources, vec!["/first.mp4", "/second.mp4", "/third.mp4"]);
    }

    #[test]
    fn test_nested_scan_ignores_sources_outside_video() {
        let html = r#"
        <html>
        <body>
            <audio><source src="/podcast.mp3"></audio>
            <video><source src="/clip.mp4"></video>
        </body>
        </html>
        "#;

        let sources = parse_video_sources(html).unwrap();
        assert_eq!(sources, vec!["/clip.mp4"]);
    }

    #[test]
    fn test_fallback_to_document_wide_sources() {
        let html = r#"
        <html>
        <body>
            <audio>
                <source src="https://cdn.example.com/track.ogg">
            </audio>
            <picture>
                <source src="https://cdn.example.com/poster.webp">
            </picture>
        </body>
        </html>
        "#;

        let sources = parse_video_sources(html).unwrap();
        assert_eq!(
            sources,
            vec![
                "https://cdn.example.com/track.ogg",
                "https://cdn.example.com/poster.webp",
            ]
        );
    }

    #[test]
    fn test_fallback_when_videos_have_no_sources() {
        let html = r#"
        <html>
        <body>
            <video src="https://cdn.example.com/direct.mp4"></video>
            <audio><source src="https://cdn.example.com/track.ogg"></audio>
        </body>
        </html>
        "#;

        let sources = parse_video_sources(html).unwrap();
        assert_eq!(sources, vec!["https://cdn.example.com/track.ogg"]);
    }

    #[test]
    fn test_relative_and_entity_urls_kept_verbatim() {
        let html = r#"
        <video>
            <source src="videos/clip.mp4?token=abc&amp;expires=1">
            <source src="//cdn.example.com/clip.mp4">
        </video>
        "#;

        let sources = parse_video_sources(html).unwrap();
        assert_eq!(
            sources,
            vec![
                "videos/clip.mp4?token=abc&expires=1",
                "//cdn.example.com/clip.mp4",
            ]
        );
    }

    #[test]
    fn test_duplicates_are_kept() {
        let html = r#"
        <video><source src="/same.mp4"></video>
        <video><source src="/same.mp4"></video>
        "#;

        let sources = parse_video_sources(html).unwrap();
        assert_eq!(sources, vec!["/same.mp4", "/same.mp4"]);
    }

    #[test]
    fn test_missing_src_in_video_fails() {
        let html = r#"
        <video>
            <source src="/ok.mp4">
            <source type="video/mp4">
        </video>
        "#;

        match parse_video_sources(html) {
            Err(MediaSrcError::MissingAttribute {
                tag,
                attribute,
                position,
            }) => {
                assert_eq!(tag, "source");
                assert_eq!(attribute, "src");
                assert_eq!(position, 1);
            }
            other => panic!("Expected MissingAttribute error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_src_in_fallback_scan_fails() {
        let html = r#"
        <picture>
            <source srcset="/poster.webp">
        </picture>
        "#;

        match parse_video_sources(html) {
            Err(MediaSrcError::MissingAttribute { position, .. }) => assert_eq!(position, 0),
            other => panic!("Expected MissingAttribute error, got {:?}", other),
        }
    }

    fn video_page(videos: usize, sources_per_video: usize) -> (String, Vec<String>) {
        let mut html = String::from("<html><body>");
        let mut expected = Vec::new();
        for v in 0..videos {
            html.push_str("<div><video controls>");
            for s in 0..sources_per_video {
                let url = format!("https://cdn.example.com/v{v}/s{s}.mp4");
                html.push_str(&format!(r#"<source src="{url}" type="video/mp4">"#));
                expected.push(url);
            }
            html.push_str("</video></div>");
        }
        html.push_str("</body></html>");
        (html, expected)
    }

    proptest! {
        #[test]
        fn prop_nested_scan_returns_every_source_in_order(
            videos in 1usize..6,
            sources_per_video in 1usize..5,
        ) {
            let (html, expected) = video_page(videos, sources_per_video);
            let sources = parse_video_sources(&html).unwrap();
            prop_assert_eq!(sources.len(), videos * sources_per_video);
            prop_assert_eq!(sources, expected);
        }

        #[test]
        fn prop_fallback_scan_counts_loose_sources(count in 0usize..10) {
            let mut html = String::from("<html><body><audio>");
            for i in 0..count {
                html.push_str(&format!(r#"<source src="/track-{i}.ogg">"#));
            }
            html.push_str("</audio></body></html>");

            let sources = parse_video_sources(&html).unwrap();
            prop_assert_eq!(sources.len(), count);
        }
    }
}
