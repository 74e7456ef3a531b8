//! Page readiness strategies for browser-rendered pages
//!
//! After navigation the browser reports "loaded", but players are often
//! inserted by scripts later. A [`WaitStrategy`] decides how long to give
//! those scripts before the DOM is captured.

use std::future::Future;
use std::time::Duration;

use scraper::{Html, Selector};
use tokio::time::{Instant, sleep};
use tracing::{debug, warn};

use crate::error::Result;
use crate::parser::selector;

/// Default blind wait after navigation
pub const DEFAULT_FIXED_WAIT: Duration = Duration::from_secs(3);
/// Default upper bound for selector polling
pub const DEFAULT_POLL_TIMEOUT: Duration = Duration::from_secs(10);
/// Default delay between two DOM snapshots while polling
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Deadline cap for timeouts too large to add to the current instant
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// Source of rendered HTML snapshots
///
/// Implemented by the browser page; tests substitute scripted snapshots.
pub trait DocumentSource {
    /// Current serialized DOM
    fn snapshot(&self) -> impl Future<Output = Result<String>> + Send;
}

/// How to decide that a rendered page is ready for capture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitStrategy {
    /// Sleep unconditionally for the given duration
    Fixed(Duration),
    /// Poll the DOM until `selector` matches or `timeout` elapses
    Selector {
        selector: String,
        timeout: Duration,
        poll_interval: Duration,
    },
}

impl Default for WaitStrategy {
    fn default() -> Self {
        WaitStrategy::Fixed(DEFAULT_FIXED_WAIT)
    }
}

impl WaitStrategy {
    /// Build a selector-polling strategy, rejecting unparseable selectors
    ///
    /// # Errors
    /// Returns `InvalidSelector` if `css` is not a valid CSS selector
    pub fn selector(css: &str, timeout: Duration, poll_interval: Duration) -> Result<Self> {
        selector(css)?;
        Ok(WaitStrategy::Selector {
            selector: css.to_string(),
            timeout,
            poll_interval,
        })
    }

    /// Wait until the page behind `source` is considered ready
    ///
    /// Returns `true` if readiness was observed, `false` if a selector
    /// poll ran out of time. The fixed strategy always returns `true`.
    /// A poll timeout is not an error: the caller captures whatever has
    /// rendered so far.
    ///
    /// # Errors
    /// - `InvalidSelector` if the selector is invalid
    /// - any error raised while taking a snapshot
    pub async fn settle<S>(&self, source: &S) -> Result<bool>
    where
        S: DocumentSource + Sync,
    {
        match self {
            WaitStrategy::Fixed(delay) => {
                debug!(?delay, "Waiting fixed delay for client-side rendering");
                sleep(*delay).await;
                Ok(true)
            }
            WaitStrategy::Selector {
                selector: css,
                timeout,
                poll_interval,
            } => {
                let target = selector(css)?;
                let started = Instant::now();
                let deadline = started
                    .checked_add(*timeout)
                    .unwrap_or_else(|| started + FAR_FUTURE);
                loop {
                    let html = source.snapshot().await?;
                    if document_matches(&html, &target) {
                        debug!(selector = %css, "Readiness selector matched");
                        return Ok(true);
                    }

                    let now = Instant::now();
                    if now >= deadline {
                        warn!(selector = %css, ?timeout, "Readiness selector did not match before timeout");
                        return Ok(false);
                    }
                    sleep((*poll_interval).min(deadline - now)).await;
                }
            }
        }
    }
}

/// Whether `selector` matches at least one element of `html`
fn document_matches(html: &str, selector: &Selector) -> bool {
    Html::parse_document(html).select(selector).next().is_some()
}
