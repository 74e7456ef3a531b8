//! Command-line interface definitions for mediasrc.
//!
//! Two positional arguments select the extraction and the page. The
//! remaining options only tune how the page is fetched or rendered; their
//! defaults reproduce a plain `mediasrc <content_type> <url>` run.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use clap::error::ErrorKind;
use mediasrc_core::wait::{DEFAULT_FIXED_WAIT, DEFAULT_POLL_INTERVAL, DEFAULT_POLL_TIMEOUT};
use mediasrc_core::{
    BrowserOptions, ClientConfig, ContentType, ExtractorConfig, Result, WaitStrategy,
};

/// Command-line arguments for mediasrc.
///
/// # Examples
///
/// ```sh
/// # Video sources from the rendered page, printed as a JSON array
/// mediasrc video https://example.com/watch/42
///
/// # Iframe sources from the raw HTML, one per line
/// mediasrc iframe https://example.com/embeds
///
/// # Poll for the player instead of sleeping a fixed 3 seconds
/// mediasrc video https://example.com/watch/42 --wait-for "video source"
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about, arg_required_else_help = true)]
pub struct Cli {
    /// Kind of URLs to extract: `video` or `iframe`
    pub content_type: String,

    /// Page to extract from
    pub url: String,

    /// Seconds to wait after navigation before capturing the page
    #[arg(long, default_value_t = DEFAULT_FIXED_WAIT.as_secs())]
    pub wait_secs: u64,

    /// Poll the rendered page until this CSS selector matches instead of a fixed wait
    #[arg(long, value_name = "CSS")]
    pub wait_for: Option<String>,

    /// Give up polling for `--wait-for` after this many seconds
    #[arg(long, default_value_t = DEFAULT_POLL_TIMEOUT.as_secs())]
    pub wait_timeout_secs: u64,

    /// Milliseconds between two polls for `--wait-for`
    #[arg(
        long,
        default_value_t = DEFAULT_POLL_INTERVAL.as_millis() as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub poll_interval_ms: u64,

    /// Show the browser window
    #[arg(long)]
    pub headed: bool,

    /// Path to the Chrome/Chromium executable
    #[arg(long, value_name = "PATH")]
    pub chrome: Option<PathBuf>,

    /// HTTP request timeout in seconds for iframe extraction
    #[arg(long)]
    pub http_timeout_secs: Option<u64>,

    /// User-Agent header for iframe extraction
    #[arg(long)]
    pub user_agent: Option<String>,
}

/// A validated request: what to extract, from where, and how
#[derive(Debug)]
pub struct Invocation {
    pub content_type: ContentType,
    pub url: String,
    pub config: ExtractorConfig,
}

impl Cli {
    /// Validate the arguments and build the extractor configuration
    ///
    /// # Errors
    /// - `InvalidContentType` if `content_type` is not `video` or `iframe`
    /// - `InvalidSelector` if `--wait-for` is not a valid CSS selector
    pub fn into_invocation(self) -> Result<Invocation> {
        let content_type: ContentType = self.content_type.parse()?;

        let wait = match self.wait_for.as_deref() {
            Some(css) => WaitStrategy::selector(
                css,
                Duration::from_secs(self.wait_timeout_secs),
                Duration::from_millis(self.poll_interval_ms),
            )?,
            None => WaitStrategy::Fixed(Duration::from_secs(self.wait_secs)),
        };

        let config = ExtractorConfig {
            client: ClientConfig {
                timeout_secs: self.http_timeout_secs,
                user_agent: self.user_agent,
            },
            browser: BrowserOptions {
                headless: !self.headed,
                executable: self.chrome,
                ..BrowserOptions::default()
            },
            wait,
        };

        Ok(Invocation {
            content_type,
            url: self.url,
            config,
        })
    }
}

/// Exit status for an argument parsing outcome
///
/// Help and version requests succeed; every other parse failure,
/// including missing arguments, exits with status 1.
pub fn parse_exit_code(kind: ErrorKind) -> u8 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}
