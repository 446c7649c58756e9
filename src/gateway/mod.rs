use std::time::Duration;

use crate::{
    config::{Credentials, GatewayConfig},
    relay::api::PaymentRequest,
};

mod auth;
mod error;
/// Outbound payment initiation payload
mod payin;

pub use error::GatewayError;

pub type Result<T> = std::result::Result<T, GatewayError>;

#[derive(Debug, Clone)]
pub struct PesapalGateway {
    client: reqwest::Client,
    base_url: String,
    credentials: Credentials,
}

impl PesapalGateway {
    /// Bound on one outbound call so a hung gateway cannot pin a worker.
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new(config: &GatewayConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .expect("http client configuration is valid");
        Self {
            client,
            base_url: config.base_url.clone(),
            credentials: config.credentials.clone(),
        }
    }

    /// Forward a payment initiation request to Pesapal.
    ///
    /// The gateway's JSON body is returned untouched on success; transport
    /// failures, non-success statuses and unparseable bodies map to
    /// [`GatewayError`].
    pub async fn initiate_payment(&self, request: &PaymentRequest) -> Result<serde_json::Value> {
        let payload = payin::PaymentInitRequest::from(request);
        let headers = auth::credential_headers(&self.credentials);
        tracing::debug!(
            url = %self.base_url,
            reference_no = %payload.reference_no,
            "Gateway API payment init request"
        );
        let res = self
            .client
            .post(&self.base_url)
            .json(&payload)
            .headers(headers)
            .send()
            .await?;
        let status = res.status();
        let body = res.text().await?;
        tracing::debug!(%status, %body, "Gateway API payment init response");
        if !status.is_success() {
            return Err(GatewayError::GatewayStatus { status, body });
        }
        Ok(serde_json::from_str(&body)?)
    }
}
