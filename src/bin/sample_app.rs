use anyhow::Context;
use conformance::{
    settings::Settings,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("sample-app".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let settings = Settings::load().context("Failed to read configuration")?;

    let app = Application::builder_from_settings(settings)
        .build()
        .context("Failed to bind the sample application")?;

    app.run_until_stopped().await?;

    Ok(())
}
