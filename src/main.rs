use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{error, info};

use bilingual_portfolio::config::Config;
use bilingual_portfolio::content::ContentStore;
use bilingual_portfolio::error::ContentError;
use bilingual_portfolio::export::export_site;
use bilingual_portfolio::readiness::content_slot;
use bilingual_portfolio::render::ContentRenderer;
use bilingual_portfolio::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bilingual_portfolio=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let today = chrono::Local::now().date_naive();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("export") => {
            let out_dir = args
                .get(1)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("dist"));
            export(&config, today, out_dir).await
        }
        Some(other) => anyhow::bail!("unknown command '{}' (expected 'export <dir>')", other),
        None => serve(config, today).await,
    }
}

async fn load_content(config: &Config, today: NaiveDate) -> Result<ContentStore, ContentError> {
    match &config.content_path {
        Some(path) => {
            info!("Loading content from {}", path.display());
            ContentStore::load(path, config.career_start, today).await
        }
        None => ContentStore::embedded(config.career_start, today),
    }
}

async fn export(config: &Config, today: NaiveDate, out_dir: PathBuf) -> Result<()> {
    let store = load_content(config, today)
        .await
        .context("Failed to load content for export")?;
    let written = export_site(&store, &ContentRenderer::new(), &out_dir)
        .await
        .with_context(|| format!("Failed to export site to {}", out_dir.display()))?;

    info!("Exported {} pages to {}", written.len(), out_dir.display());
    Ok(())
}

async fn serve(config: Config, today: NaiveDate) -> Result<()> {
    let (publisher, handle) = content_slot();

    // Content loads in the background; requests wait on the handle with a bound.
    let loader_config = config.clone();
    tokio::spawn(async move {
        match load_content(&loader_config, today).await {
            Ok(store) => {
                info!(
                    "Content ready: {} locales, {}+ years of experience",
                    store.locales().count(),
                    store.experience_years()
                );
                publisher.publish(Arc::new(store));
            }
            Err(err) => error!("Failed to load content: {}", err),
        }
    });

    let addr = format!("{}:{}", config.bind_addr, config.port);
    let state = AppState {
        content: handle,
        renderer: Arc::new(ContentRenderer::new()),
        config: Arc::new(config),
    };

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, server::router(state))
        .await
        .context("Server error")?;
    Ok(())
}
