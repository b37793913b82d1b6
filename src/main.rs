use anyhow::Context;
use conformance::{
    checks::RootEndpointCheck,
    fetch::Fetcher,
    settings::Settings,
    telemetry::{get_subscriber, init_subscriber},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("conformance".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let settings = Settings::load().context("Failed to read configuration")?;

    let fetcher = Fetcher::new(settings.target.timeout()).context("Failed to build fetcher")?;
    let check = RootEndpointCheck::new(&settings.target.base_url, fetcher)?;

    check.run().await?;

    tracing::info!("root endpoint conformance check passed");

    Ok(())
}
