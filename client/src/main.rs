use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use shared::models::BidResponse;
use shared::Config;
use tokio::time::timeout;
use tracing::info;

/// Budget for the whole service round trip, measured from invocation start.
const REQUEST_DEADLINE: Duration = Duration::from_millis(300);

// One-shot requester: ask the quote service for the current bid and write it
// to a local file. Any failure aborts the run with a nonzero exit and leaves
// no partial output.

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = Config::from_env()?;
    run(&config.quote_service_url, Path::new(&config.output_path)).await
}

async fn run(service_url: &str, output_path: &Path) -> Result<()> {
    let quote = timeout(REQUEST_DEADLINE, fetch_bid(service_url))
        .await
        .map_err(|_| anyhow!("quote request exceeded its {:?} deadline", REQUEST_DEADLINE))??;

    std::fs::write(output_path, format!("Dolar:{{{}}}", quote.bid))
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    info!("Saved quotation to {}", output_path.display());

    Ok(())
}

async fn fetch_bid(service_url: &str) -> Result<BidResponse> {
    let client = reqwest::Client::new();
    let response = client.get(service_url).send().await?;

    let status = response.status();
    if !status.is_success() {
        bail!("quote service returned {}", status);
    }

    let quote: BidResponse = response.json().await?;
    Ok(quote)
}
