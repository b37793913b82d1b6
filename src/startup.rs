use std::{io, net::TcpListener};

use actix_web::{dev::Server, web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::{
    routes::{health_check, root},
    settings::{ApplicationSettings, Settings},
};

#[derive(Debug)]
pub struct ApplicationBuilder {
    settings: Settings,
    tcp_listener: Option<TcpListener>,
}

impl ApplicationBuilder {
    pub fn from_settings(settings: Settings) -> Self {
        Self {
            settings,
            tcp_listener: None,
        }
    }

    /// Tests inject a pre-bound listener here to get a random port.
    pub fn set_tcp_listener(mut self, tcp_listener: TcpListener) -> Self {
        self.tcp_listener = Some(tcp_listener);
        self
    }

    pub fn build(self) -> Result<Application, io::Error> {
        let Self {
            settings,
            tcp_listener,
        } = self;

        let tcp_listener = match tcp_listener {
            Some(tcp_listener) => tcp_listener,
            None => {
                let ApplicationSettings { host, port, .. } = &settings.application;

                TcpListener::bind(format!("{host}:{port}"))?
            }
        };

        Ok(Application {
            port: tcp_listener.local_addr()?.port(),
            tcp_listener,
        })
    }
}

pub struct Application {
    port: u16,
    tcp_listener: TcpListener,
}

impl Application {
    pub fn builder_from_settings(settings: Settings) -> ApplicationBuilder {
        ApplicationBuilder::from_settings(settings)
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), io::Error> {
        self.run()?.await
    }

    pub fn run(self) -> Result<Server, io::Error> {
        let server = HttpServer::new(move || {
            App::new()
                .wrap(TracingLogger::default())
                .route("/health_check", web::get().to(health_check))
                .route("/", web::get().to(root))
        })
        .listen(self.tcp_listener)?
        .run();

        Ok(server)
    }
}
