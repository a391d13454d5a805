//! Listen Notes API demo
//!
//! Pages through a search and prints the available podcast regions.
//! Set `LISTEN_API_KEY` to hit the production API; without it the sandbox is used.

use anyhow::{Context, Result};
use podcast_api::utils::logging::init_logging;
use podcast_api::{args, Args, PodcastClient, Settings};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new().context("Failed to load settings")?;

    init_logging(&settings.logging)?;
    info!("{}", podcast_api::version_info());

    if settings.uses_sandbox() {
        info!("No API key configured, using the sandbox API");
    }

    let client = PodcastClient::from_settings(&settings).context("Failed to create client")?;

    // The sandbox returns the same page each time; this shows how to follow next_offset.
    let next_offset = fetch_and_output_page(&client, 0).await;
    fetch_and_output_page(&client, next_offset).await;

    println!("\nRegions:");
    match client.fetch_podcast_regions(&Args::new()).await {
        Ok(regions) => println!("{}", regions.to_json()),
        Err(e) => println!("Failed reading regions: {}", e),
    }

    Ok(())
}

async fn fetch_and_output_page(client: &PodcastClient, offset: i64) -> i64 {
    let query = args([("q", "text".to_string()), ("offset", offset.to_string())]);

    let resp = match client.search(&query).await {
        Ok(resp) => resp,
        Err(e) => {
            warn!("Search failed for offset {}: {}", offset, e);
            println!("Search failed for offset {}: {}", offset, e);
            return offset;
        }
    };

    println!("Results for offset {}", offset);
    match resp.stats.free_quota {
        Some(quota) => println!(" Free Quota: {}", quota),
        None => println!(" Free Quota: unknown"),
    }
    println!(" Total: {}", resp.i64_at("total").unwrap_or_default());
    println!(" Count: {}", resp.i64_at("count").unwrap_or_default());

    for result in resp.array_at("results").into_iter().flatten() {
        if let Some(title) = result.get("title_original").and_then(|t| t.as_str()) {
            println!(" - {}", title);
        }
    }

    match resp.i64_at("next_offset") {
        Some(next) => next,
        None => {
            println!(" Failed to read next_offset");
            offset
        }
    }
}
