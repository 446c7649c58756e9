use axum::{
    extract::{FromRequest, State},
    routing::post,
};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::instrument;

use crate::{
    relay::{RelayErrorResponse, Result},
    state::AppState,
};

/// Inbound payment intent. All four fields are opaque to the relay and
/// forwarded to the gateway as-is.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentRequest {
    pub reference_no: String,
    pub amount: serde_json::Number,
    pub payment_method: String,
    pub currency: String,
}

#[instrument(skip_all)]
pub async fn initiate_payment(
    State(AppState { gate }): State<AppState>,
    Json(payment): Json<PaymentRequest>,
) -> Result<axum::Json<serde_json::Value>> {
    match gate.initiate_payment(&payment).await {
        Ok(response) => {
            tracing::info!(reference_no = %payment.reference_no, "Initiated payment");
            Ok(axum::Json(response))
        }
        Err(e) => {
            tracing::error!("Failed to initiate payment: {e}");
            Err(RelayErrorResponse::new(e.to_string()))
        }
    }
}

pub fn router() -> axum::Router<crate::state::AppState> {
    axum::Router::new().route("/initiate-payment", post(initiate_payment))
}

/// `Json` extractor wrapper that customizes the error from `axum::extract::Json`
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: serde::de::DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = (StatusCode, axum::Json<RelayErrorResponse>);

    async fn from_request(
        req: axum::http::Request<axum::body::Body>,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let rejection = match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => return Ok(Self(value)),
            Err(e) => e.to_string(),
        };
        Err((
            StatusCode::BAD_REQUEST,
            axum::Json(RelayErrorResponse::new(rejection)),
        ))
    }
}
