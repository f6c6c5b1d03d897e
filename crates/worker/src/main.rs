use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use biograph_openai::OpenAiClient;
use biograph_worker::config::WorkerConfig;
use biograph_worker::job::BackfillJob;
use biograph_worker::store::PgAuthorStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "biograph_worker=debug,biograph_openai=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!("Backfill aborted: {e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    // --- Configuration ---
    let config = WorkerConfig::from_env();
    tracing::info!(
        host = %config.db_host,
        port = config.db_port,
        database = %config.db_name,
        "Loaded worker configuration"
    );

    // --- Database ---
    let pool = biograph_db::create_pool(&config.database_url())
        .await
        .context("failed to connect to database")?;

    biograph_db::health_check(&pool)
        .await
        .context("database health check failed")?;
    tracing::info!("Connected to database");

    // --- Generation client ---
    let generator = OpenAiClient::new(
        config.openai_api_key.clone(),
        config.openai_api_base.clone(),
        Duration::from_secs(config.openai_timeout_secs),
    );

    // --- Backfill ---
    let store = PgAuthorStore::new(pool.clone());
    let job = BackfillJob::new(store.clone(), generator, store);

    let summary = job.run().await.context("pending author fetch failed")?;

    tracing::info!(
        succeeded = summary.succeeded,
        skipped = summary.skipped,
        "Backfill finished"
    );

    pool.close().await;
    Ok(())
}
