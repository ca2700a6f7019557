use color_eyre::eyre::Result;
use onboard::{adapters::config::ServiceSettings, in_memory_signup_service};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Standalone sign-up service backed by the in-memory account store
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = ServiceSettings::load()?;
    init_tracing(&config.log.filter)?;

    let (signup_service, _account_store) = in_memory_signup_service();

    let listener = tokio::net::TcpListener::bind(&config.application.address).await?;
    tracing::info!("Starting sign-up service...");

    signup_service.run_standalone(listener).await?;

    Ok(())
}

pub fn init_tracing(default_filter: &str) -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
