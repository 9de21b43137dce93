use anyhow::Result;
use link_tracker::{config, server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(&config.log_level, &config.log_format)?;

    config.print_summary();

    server::run(config).await
}

/// Installs the global subscriber. `json` emits one object per line,
/// anything else falls back to human-readable text.
fn init_tracing(log_level: &str, log_format: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level)?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_format {
        "json" => builder
            .json()
            .with_current_span(false)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?,
        _ => builder.with_target(false).try_init().map_err(|e| anyhow::anyhow!(e))?,
    }

    Ok(())
}
