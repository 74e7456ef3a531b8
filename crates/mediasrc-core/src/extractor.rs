//! Main extraction API
//!
//! Combines the HTTP client, the browser renderer and the HTML parsers
//! into the two extraction operations.

use tracing::{info, instrument};

use crate::browser::{BrowserOptions, ChromeRenderer, PageRenderer};
use crate::client::{ClientConfig, HttpClient};
use crate::error::Result;
use crate::parser::{parse_iframe_sources, parse_video_sources};
use crate::types::ContentType;
use crate::wait::WaitStrategy;

/// Configuration for [`MediaExtractor`]
#[derive(Debug, Clone, Default)]
pub struct ExtractorConfig {
    /// HTTP settings for iframe extraction
    pub client: ClientConfig,
    /// Browser launch settings for video extraction
    pub browser: BrowserOptions,
    /// Readiness strategy applied after navigation
    pub wait: WaitStrategy,
}

/// Extracts media source URLs from web pages
///
/// Video extraction renders the page through `R`; iframe extraction
/// fetches raw HTML over HTTP. The two never share state.
pub struct MediaExtractor<R = ChromeRenderer> {
    client: HttpClient,
    renderer: R,
    wait: WaitStrategy,
}

impl MediaExtractor<ChromeRenderer> {
    /// Create an extractor with default configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new() -> Result<Self> {
        Self::with_config(ExtractorConfig::default())
    }

    /// Create an extractor with custom configuration
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_config(config: ExtractorConfig) -> Result<Self> {
        let renderer = ChromeRenderer::with_options(config.browser);
        Self::with_renderer(config.client, renderer, config.wait)
    }
}

impl<R: PageRenderer> MediaExtractor<R> {
    /// Create an extractor around a custom renderer
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn with_renderer(client: ClientConfig, renderer: R, wait: WaitStrategy) -> Result<Self> {
        Ok(Self {
            client: HttpClient::with_config(client)?,
            renderer,
            wait,
        })
    }

    /// Readiness strategy used for video extraction
    pub fn wait_strategy(&self) -> &WaitStrategy {
        &self.wait
    }

    /// Extract video source URLs from the browser-rendered page
    ///
    /// # Arguments
    /// * `url` - Page URL, passed to the browser unvalidated
    ///
    /// # Returns
    /// `<source>` URLs in document order, possibly empty
    ///
    /// # Errors
    /// - `BrowserError` if launch, navigation or capture fails
    /// - `MissingAttribute` if a scanned `<source>` has no `src`
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> mediasrc_core::Result<()> {
    /// use mediasrc_core::MediaExtractor;
    /// let extractor = MediaExtractor::new()?;
    /// let sources = extractor.extract_video_sources("https://example.com/watch/42").await?;
    /// for src in sources {
    ///     println!("{}", src);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(level = "info", skip(self))]
    pub async fn extract_video_sources(&self, url: &str) -> Result<Vec<String>> {
        let html = self.renderer.render(url, &self.wait).await?;
        let sources = parse_video_sources(&html)?;
        info!(count = sources.len(), "Extracted video sources");
        Ok(sources)
    }

    /// Extract iframe source URLs from the raw server HTML
    ///
    /// # Arguments
    /// * `url` - Page URL, fetched with a single GET
    ///
    /// # Returns
    /// `<iframe>` URLs in document order, possibly empty. An error page
    /// served with a non-success status is parsed like any other.
    ///
    /// # Errors
    /// - `HttpError` on transport failure
    /// - `MissingAttribute` if an `<iframe>` has no `src`
    #[instrument(level = "info", skip(self))]
    pub async fn extract_iframe_sources(&self, url: &str) -> Result<Vec<String>> {
        let html = self.client.fetch(url).await?;
        let sources = parse_iframe_sources(&html)?;
        info!(count = sources.len(), "Extracted iframe sources");
        Ok(sources)
    }

    /// Run the extraction matching `content_type`
    pub async fn extract(&self, content_type: ContentType, url: &str) -> Result<Vec<String>> {
        match content_type {
            ContentType::Video => self.extract_video_sources(url).await,
            ContentType::Iframe => self.extract_iframe_sources(url).await,
        }
    }
}
