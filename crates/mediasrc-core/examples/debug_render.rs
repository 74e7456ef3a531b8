//! Debug script to inspect what the browser actually renders
//!
//! Run with: cargo run --example debug_render -p mediasrc-core -- <url> [wait-secs]

use std::time::Duration;

use mediasrc_core::{ChromeRenderer, PageRenderer, WaitStrategy, parse_video_sources};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let url = args.next().ok_or("usage: debug_render <url> [wait-secs]")?;
    let wait_secs = args.next().map(|s| s.parse()).transpose()?.unwrap_or(3);

    println!("Rendering {} (waiting {}s)...\n", url, wait_secs);

    let renderer = ChromeRenderer::new();
    let html = renderer
        .render(&url, &WaitStrategy::Fixed(Duration::from_secs(wait_secs)))
        .await?;

    std::fs::write("debug_rendered.html", &html)?;
    println!("HTML saved to debug_rendered.html ({} bytes)", html.len());

    match parse_video_sources(&html) {
        Ok(sources) if sources.is_empty() => println!("No video sources found"),
        Ok(sources) => {
            println!("Found {} video sources:", sources.len());
            for src in sources {
                println!("  {}", src);
            }
        }
        Err(e) => println!("Parse failed: {}", e),
    }

    if let Some(start) = html.find("<video") {
        let snippet = &html[start..std::cmp::min(start + 2000, html.len())];
        println!("\n=== HTML snippet (first 2000 chars from <video>) ===\n");
        println!("{}", snippet);
    }

    Ok(())
}
