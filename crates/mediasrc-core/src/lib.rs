//! Media Source Extraction Core Library
//!
//! Provides async API for pulling video and iframe source URLs out of web pages.
//!
//! # Overview
//!
//! Two independent extraction paths:
//! - **Video**: the page is rendered in headless Chromium, given time for
//!   client-side scripts to insert their players, then scanned for
//!   `<video>`/`<source>` URLs
//! - **Iframe**: the raw server HTML is fetched with a single GET and
//!   scanned for `<iframe>` URLs
//!
//! # Example
//!
//! ```no_run
//! use mediasrc_core::{MediaExtractor, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let extractor = MediaExtractor::new()?;
//!
//!     // Rendered <video> sources
//!     let videos = extractor.extract_video_sources("https://example.com/watch/42").await?;
//!     println!("{:?}", videos);
//!
//!     // Static <iframe> sources
//!     for src in extractor.extract_iframe_sources("https://example.com/embeds").await? {
//!         println!("{}", src);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Source URLs
//!
//! URLs are returned exactly as written in the `src` attribute: relative
//! URLs stay relative and duplicates are kept. An element without `src`
//! fails the whole extraction rather than being skipped.

mod browser;
mod client;
mod error;
mod extractor;
pub mod parser;
mod types;
pub mod wait;

// Re-export browser types
pub use browser::{BrowserOptions, ChromeRenderer, PageRenderer};

// Re-export client types
pub use client::{ClientConfig, HttpClient};

// Re-export error types
pub use error::{MediaSrcError, Result};

// Re-export main extraction API
pub use extractor::{ExtractorConfig, MediaExtractor};

// Re-export parser functions
pub use parser::{parse_iframe_sources, parse_video_sources};

// Re-export data types
pub use types::ContentType;

// Re-export readiness strategy
pub use wait::WaitStrategy;
