//! Pokedex - A command-line PokeAPI explorer
//!
//! Interactive front end over the `pokedex` library.

use std::io;
use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{Cache, Config, PokeApiClient, Repl};

/// Main entry point for the Pokedex REPL.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber (stderr, quiet by default)
/// 2. Load configuration from environment variables
/// 3. Create the response cache, which starts its reaper
/// 4. Run the REPL on stdin/stdout until `exit` or end of input
/// 5. Stop the reaper and report cache statistics
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "warn" so log lines don't interleave with the REPL,
    // can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env();
    debug!(
        "Configuration loaded: cache_ttl={}s, base_url={}, http_timeout={}s, page_size={}",
        config.cache_ttl, config.base_url, config.http_timeout, config.page_size
    );

    let cache = Arc::new(Cache::new(config.cache_ttl()).context("creating response cache")?);
    let client =
        PokeApiClient::new(&config, cache.clone()).context("creating PokeAPI client")?;

    let mut repl = Repl::new(client);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    repl.run(stdin.lock(), &mut stdout, &mut stderr).await?;
    drop(repl);

    let stats = cache.stats().await;
    info!(
        stats = %serde_json::to_string(&stats).unwrap_or_default(),
        hit_rate = stats.hit_rate(),
        "Session cache statistics"
    );

    // The REPL held the only other reference; dropping would also stop the reaper
    if let Ok(cache) = Arc::try_unwrap(cache) {
        cache.shutdown().await;
    }

    Ok(())
}
