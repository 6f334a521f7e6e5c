use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use studio_quote::config::Config;
use studio_quote::pricing::PricingCatalog;
use studio_quote::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real deployments set the environment directly
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("studio_quote=info,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to read configuration")?;

    let catalog = PricingCatalog::studio();
    catalog.validate().context("Pricing catalog is invalid")?;
    info!(
        volume_tiers = catalog.volume_tiers.len(),
        "Pricing catalog loaded"
    );

    let state = AppState::new(catalog, &config);
    let router = app(state, &config);

    let address = config.address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Quote service listening on {}", address);

    axum::serve(listener, router).await?;

    Ok(())
}
