use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sponsors_updater::{pipeline, Config, LinkOverrides, OpenCollectiveFeed};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("sponsors_updater=info".parse()?)
                .add_directive("opencollective_client=info".parse()?),
        )
        .init();

    info!("Sponsors updater starting...");

    let config = Config::socketio();
    config.log_summary();

    let overrides = LinkOverrides::socketio();
    let output_path = config.output_path()?;

    let feed = OpenCollectiveFeed::from_config(&config);
    pipeline::run(&feed, &config, &overrides, &output_path).await?;

    Ok(())
}
