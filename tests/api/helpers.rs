use std::net::TcpListener;
use std::time::Duration;

use conformance::{
    fetch::Fetcher,
    settings::Settings,
    startup::Application,
    telemetry::{get_subscriber, init_subscriber},
};
use once_cell::sync::Lazy;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    timeout: Duration,
}

impl TestApp {
    /// Spins up an instance of the sample application on a random port and
    /// returns its base address (i.e. http://127.0.0.1:XXXX).
    pub async fn spawn() -> Self {
        Lazy::force(&TRACING);

        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{port}");

        let settings = Settings::load().expect("Failed to read configuration");
        let timeout = settings.target.timeout();

        let app = Application::builder_from_settings(settings)
            .set_tcp_listener(listener)
            .build()
            .expect("Failed to build application");

        let _ = tokio::spawn(app.run_until_stopped());

        TestApp { address, timeout }
    }

    /// Fetch helper configured with the target timeout from the settings.
    pub fn fetcher(&self) -> Fetcher {
        Fetcher::new(self.timeout).expect("Failed to build fetcher")
    }

    pub async fn get_health_check(&self) -> reqwest::Response {
        reqwest::Client::new()
            .get(format!("{}/health_check", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get_root(&self) -> reqwest::Response {
        reqwest::Client::new()
            .get(format!("{}/", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }
}
