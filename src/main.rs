use std::net::{Ipv4Addr, SocketAddrV4};

use pesapal_relay::{app, config::Config, gateway::PesapalGateway, state::AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_ansi(false)
        .init();

    match dotenvy::dotenv() {
        Ok(p) => tracing::info!(path = %p.display(), "Loaded environment variables from .env file"),
        Err(e) => tracing::warn!("Failed to load environment variables from .env: {e}"),
    };

    let config = Config::from_env().expect("environment configuration is incomplete");
    let gate = PesapalGateway::new(&config.gateway);
    let app = app(&config, AppState::new(gate));

    let listener =
        tokio::net::TcpListener::bind(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, config.port))
            .await
            .unwrap();

    tracing::info!("Serving on port {}", config.port);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .unwrap();
}
