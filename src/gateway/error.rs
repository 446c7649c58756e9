use std::fmt::Display;

#[derive(Debug)]
pub enum GatewayError {
    RequestError(reqwest::Error),
    GatewayStatus {
        status: reqwest::StatusCode,
        body: String,
    },
    GatewayDeserialization(serde_json::Error),
}

impl From<reqwest::Error> for GatewayError {
    fn from(value: reqwest::Error) -> Self {
        Self::RequestError(value)
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(value: serde_json::Error) -> Self {
        Self::GatewayDeserialization(value)
    }
}

impl std::error::Error for GatewayError {}

impl Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::RequestError(e) => write!(f, "http request error: {e}"),
            GatewayError::GatewayStatus { status, body } => {
                write!(f, "gateway responded with status {status}: {body}")
            }
            GatewayError::GatewayDeserialization(e) => {
                write!(f, "gateway response deserialization: {e}")
            }
        }
    }
}
