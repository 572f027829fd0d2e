mod cheer;
mod config;
mod content;
mod embeddings;
mod errors;
mod llm_client;
mod models;
mod routes;
mod state;
#[cfg(test)]
mod testing;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cheer::pipeline::{CheerPipeline, RetryPolicy};
use crate::config::Config;
use crate::content::{build_corpus, load_roster};
use crate::embeddings::{EmbeddingIndex, EmbeddingProvider, OpenAIEmbeddingProvider};
use crate::llm_client::{ChatModel, LlmClient};
use crate::routes::build_app;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting cheerup API v{}", env!("CARGO_PKG_VERSION"));

    // Content Store: a missing or malformed roster is fatal
    let roster = load_roster(&config.roster_path)
        .with_context(|| format!("cannot start without roster at {}", config.roster_path))?;
    let corpus = build_corpus(&roster);
    info!("Corpus assembled: {} snippets", corpus.len());

    // Embedding Index
    let embedder: Arc<dyn EmbeddingProvider> = Arc::new(OpenAIEmbeddingProvider::new(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
    )?);
    let index = EmbeddingIndex::build(&corpus, embedder, config.retrieval_top_k)
        .await
        .context("failed to build embedding index")?;

    // Generation client
    let llm: Arc<dyn ChatModel> = Arc::new(LlmClient::new(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
    )?);
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let pipeline = CheerPipeline::new(
        Arc::new(index),
        llm,
        RetryPolicy {
            max_attempts: config.generation_max_attempts,
            backoff_base: config.generation_backoff,
        },
    );

    let state = AppState {
        pipeline: Arc::new(pipeline),
    };

    let app = build_app(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("HOST/PORT do not form a valid socket address")?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
