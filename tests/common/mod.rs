use std::path::Path;

use pesapal_relay::{
    app,
    config::{Config, Credentials, GatewayConfig},
    gateway::PesapalGateway,
    state::AppState,
};

pub const CLIENT_ID: &str = "client-1";
pub const CLIENT_SECRET: &str = "secret-1";
pub const ALLOWED_ORIGIN: &str = "https://localhost:4000";

pub fn test_config(gateway_url: &str, assets_dir: &Path) -> Config {
    Config {
        port: 0,
        allowed_origin: ALLOWED_ORIGIN.to_string(),
        assets_dir: assets_dir.to_path_buf(),
        gateway: GatewayConfig {
            base_url: gateway_url.to_string(),
            credentials: Credentials {
                client_id: CLIENT_ID.to_string(),
                client_secret: CLIENT_SECRET.to_string(),
            },
        },
    }
}

pub fn test_app(config: &Config) -> axum::Router {
    let gate = PesapalGateway::new(&config.gateway);
    app(config, AppState::new(gate))
}
