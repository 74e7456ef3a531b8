//! Headless browser rendering over the Chrome DevTools Protocol
//!
//! Every render launches its own browser, loads one page, waits for it to
//! settle and captures the serialized DOM. The browser is shut down before
//! `render` returns, whether or not the capture succeeded.

use std::fmt::Display;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use chromiumoxide::Page;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

use crate::error::{MediaSrcError, Result};
use crate::wait::{DocumentSource, WaitStrategy};

/// Renders a URL to its final HTML
///
/// The seam between extraction and the browser engine. [`ChromeRenderer`]
/// is the production implementation.
pub trait PageRenderer {
    /// Load `url`, wait according to `wait` and return the rendered HTML
    fn render(&self, url: &str, wait: &WaitStrategy) -> impl Future<Output = Result<String>> + Send;
}

/// Launch options for the browser
#[derive(Debug, Clone)]
pub struct BrowserOptions {
    /// Run without a visible window (default: true)
    pub headless: bool,
    /// Chrome/Chromium binary; auto-detected when `None`
    pub executable: Option<PathBuf>,
    /// How long to wait for the browser process to come up
    pub launch_timeout: Option<Duration>,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            headless: true,
            executable: None,
            launch_timeout: None,
        }
    }
}

impl BrowserOptions {
    fn to_config(&self) -> Result<BrowserConfig> {
        let mut builder = BrowserConfig::builder();
        if !self.headless {
            builder = builder.with_head();
        }
        if let Some(path) = &self.executable {
            builder = builder.chrome_executable(path);
        }
        if let Some(timeout) = self.launch_timeout {
            builder = builder.launch_timeout(timeout);
        }
        builder.build().map_err(MediaSrcError::BrowserConfig)
    }
}

/// Renderer backed by a freshly launched Chromium per call
#[derive(Debug, Clone, Default)]
pub struct ChromeRenderer {
    options: BrowserOptions,
}

impl ChromeRenderer {
    /// Create a renderer with default (headless, auto-detected) options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with custom launch options
    pub fn with_options(options: BrowserOptions) -> Self {
        Self { options }
    }

    /// Launch options in use
    pub fn options(&self) -> &BrowserOptions {
        &self.options
    }
}

impl PageRenderer for ChromeRenderer {
    #[instrument(level = "info", skip(self, wait))]
    async fn render(&self, url: &str, wait: &WaitStrategy) -> Result<String> {
        let session = BrowserSession::launch(&self.options).await?;
        let outcome = session.capture(url, wait).await;
        release(session, outcome).await
    }
}

impl DocumentSource for Page {
    async fn snapshot(&self) -> Result<String> {
        Ok(self.content().await?)
    }
}

/// A resource that must be shut down once its work is done
pub(crate) trait Session {
    fn close(self) -> impl Future<Output = Result<()>> + Send;
}

/// Close `session` and hand back `outcome` unchanged
///
/// A failed close is logged, never reported in place of `outcome`.
pub(crate) async fn release<S, T>(session: S, outcome: Result<T>) -> Result<T>
where
    S: Session,
{
    if let Err(e) = session.close().await {
        warn!(error = %e, "Failed to shut down browser cleanly");
    }
    outcome
}

/// Wait for the browser process to exit, then join its CDP handler
///
/// A failed wait is logged; the handler is joined regardless.
async fn reap<T, E, J>(
    exit: impl Future<Output = std::result::Result<T, E>>,
    handler: impl Future<Output = std::result::Result<(), J>>,
) where
    E: Display,
    J: Display,
{
    if let Err(e) = exit.await {
        warn!(error = %e, "Failed to wait for browser process exit");
    }
    if let Err(e) = handler.await {
        debug!(error = %e, "CDP handler task ended abnormally");
    }
}

/// One launched browser plus the task driving its CDP connection
struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
}

impl BrowserSession {
    async fn launch(options: &BrowserOptions) -> Result<Self> {
        let config = options.to_config()?;
        let (browser, mut handler) = Browser::launch(config).await?;
        info!(headless = options.headless, "Browser launched");

        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    debug!(error = %e, "CDP handler reported an error");
                }
            }
        });

        Ok(Self { browser, handler })
    }

    async fn capture(&self, url: &str, wait: &WaitStrategy) -> Result<String> {
        let page = self.browser.new_page("about:blank").await?;
        page.goto(url).await?;
        debug!(%url, "Navigation complete");

        wait.settle(&page).await?;

        let html = page.content().await?;
        debug!(bytes = html.len(), "Captured rendered document");
        Ok(html)
    }
}

impl Session for BrowserSession {
    async fn close(mut self) -> Result<()> {
        let closed = self.browser.close().await;
        if closed.is_err() {
            // The CDP connection may already be gone; make sure the process is.
            if let Some(Err(e)) = self.browser.kill().await {
                warn!(error = %e, "Failed to kill browser process");
            }
        }
        reap(self.browser.wait(), self.handler).await;
        debug!("Browser shut down");
        closed.map(|_| ()).map_err(MediaSrcError::from)
    }
}
