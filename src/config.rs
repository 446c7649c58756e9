use std::path::PathBuf;

use anyhow::Context;

/// Default Pesapal payment initiation endpoint.
const DEFAULT_GATEWAY_URL: &str = "https://bbi.pesapal.com/api";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub allowed_origin: String,
    pub assets_dir: PathBuf,
    pub gateway: GatewayConfig,
}

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
    pub credentials: Credentials,
}

/// Gateway credential pair. Loaded once at startup, read-only for the
/// process lifetime.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

// The secret must never reach logs, even through a derived Debug
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5000);
        let allowed_origin = std::env::var("CORS_ALLOW_ORIGIN")
            .unwrap_or_else(|_| "https://localhost:4000".to_string());
        let assets_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("frontend/build"));
        let base_url = std::env::var("PESAPAL_API_URL")
            .unwrap_or_else(|_| DEFAULT_GATEWAY_URL.to_string());
        let client_id =
            std::env::var("PESAPAL_CLIENT_ID").context("PESAPAL_CLIENT_ID must be set")?;
        let client_secret =
            std::env::var("PESAPAL_CLIENT_SECRET").context("PESAPAL_CLIENT_SECRET must be set")?;

        Ok(Self {
            port,
            allowed_origin,
            assets_dir,
            gateway: GatewayConfig {
                base_url,
                credentials: Credentials {
                    client_id,
                    client_secret,
                },
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_debug_redacts_the_secret() {
        let creds = Credentials {
            client_id: "id-1".to_string(),
            client_secret: "super-secret".to_string(),
        };
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("id-1"));
        assert!(!rendered.contains("super-secret"));
    }
}
