//! Iframe source parser for raw server HTML

use scraper::Html;

use super::{collect_src, selector};
use crate::error::Result;

/// Parses HTML and returns the `src` of every `<iframe>` element
///
/// # Arguments
/// * `html` - Raw HTML string as returned by the server
///
/// # Returns
/// Iframe URLs in document order, empty if the page has no iframes
///
/// # Errors
/// Returns `MissingAttribute` if an `<iframe>` has no `src`
pub fn parse_iframe_sources(html: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let iframe_selector = selector("iframe")?;

    collect_src(document.select(&iframe_selector), "iframe")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MediaSrcError;
    use proptest::prelude::*;

    #[test]
    fn test_parse_empty_html() {
        let sources = parse_iframe_sources("").unwrap();
        assert!(sources.is_empty());
    }

    #[test]
    fn test_parse_iframes_anywhere_in_document() {
        let html = r#"
        <html>
        <head><title>Embed page</title></head>
        <body>
            <iframe src="https://player.example.com/embed/1"></iframe>
            <section>
                <div><iframe src="//player.example.com/embed/2" allowfullscreen></iframe></div>
            </section>
            <footer><iframe src="/ads/banner"></iframe></footer>
        </body>
        </html>
        "#;

        let sources = parse_iframe_sources(html).unwrap();
        assert_eq!(
            sources,
            vec![
                "https://player.example.com/embed/1",
                "//player.example.com/embed/2",
                "/ads/banner",
            ]
        );
    }

    #[test]
    fn test_empty_src_is_kept() {
        let html = r#"<iframe src=""></iframe><iframe src="/x"></iframe>"#;
        let sources = parse_iframe_sources(html).unwrap();
        assert_eq!(sources, vec!["", "/x"]);
    }

    #[test]
    fn test_missing_src_fails() {
        let html = r#"
        <iframe src="/first"></iframe>
        <iframe srcdoc="<p>inline</p>"></iframe>
        "#;

        match parse_iframe_sources(html) {
            Err(MediaSrcError::MissingAttribute { tag, position, .. }) => {
                assert_eq!(tag, "iframe");
                assert_eq!(position, 1);
            }
            other => panic!("Expected MissingAttribute error, got {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn prop_returns_every_iframe_in_order(ids in proptest::collection::vec(0u32..10_000, 0..12)) {
            let mut html = String::from("<html><body>");
            let mut expected = Vec::new();
            for id in &ids {
                let url = format!("https://player.example.com/embed/{id}");
                html.push_str(&format!(r#"<p>clip</p><iframe src="{url}"></iframe>"#));
                expected.push(url);
            }
            html.push_str("</body></html>");

            let sources = parse_iframe_sources(&html).unwrap();
            prop_assert_eq!(sources, expected);
        }
    }
}
