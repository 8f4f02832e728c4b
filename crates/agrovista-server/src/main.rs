//! Agrovista Server — Application entry point.

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("agrovista=info".parse().unwrap()),
        )
        .json()
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "Agrovista failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing::info!("Starting Agrovista dashboard backend...");

    let config = agrovista_server::config::load()?;
    let _dashboard = agrovista_server::bootstrap(&config).await?;

    tracing::info!("Dashboard context ready; sessions are driven by the presentation layer.");
    tracing::info!("Agrovista server stopped.");

    Ok(())
}
