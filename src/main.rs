use jobscout::config::Config;
use jobscout::service::processor;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let summary = processor::run_batch(&config).await?;

    tracing::info!(
        checked = summary.checked,
        updated = summary.updated,
        next_start_row = summary.next_start_row,
        "Done"
    );
    Ok(())
}
