// Server binary — loads corpora, builds one engine per variant, serves the API.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::{Mutex, RwLock};
use tracing::info;
use tracing_subscriber::EnvFilter;

use aristocrat_engine::config::ServerConfig;
use aristocrat_engine::corpus::{QuoteCorpus, WordCorpus};
use aristocrat_engine::game::AristocratGame;
use aristocrat_engine::server::{GameServer, VariantMap};

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let config = ServerConfig::default();

    let quotes = QuoteCorpus::load(&config.quotes_file)
        .with_context(|| format!("loading quote corpus from {}", config.quotes_file))?;

    let mut games = HashMap::new();
    for variant in &config.variants {
        let words = WordCorpus::load(&variant.words_file)
            .with_context(|| format!("loading word corpus from {}", variant.words_file))?;
        let game = AristocratGame::new(words, quotes.clone())
            .with_context(|| format!("building game variant {}", variant.name))?;
        info!("variant {} ready", variant.name);
        games.insert(variant.name.clone(), Arc::new(Mutex::new(game)));
    }

    let variants: VariantMap = Arc::new(RwLock::new(games));
    let server = GameServer::start(variants, config.port).await?;
    info!("aristocrat server listening on port {}", server.port());
    for variant in &config.variants {
        info!("  {}", server.url_for_variant(&variant.name));
    }

    tokio::signal::ctrl_c().await?;
    info!("shutting down");
    server.shutdown();
    Ok(())
}
