use crate::relay::api::PaymentRequest;

/// Payload forwarded to Pesapal. Carries exactly the caller-supplied fields;
/// the amount stays a JSON number so it is relayed without reinterpretation.
#[derive(Debug, serde::Serialize)]
pub struct PaymentInitRequest<'a> {
    pub reference_no: &'a str,
    pub amount: &'a serde_json::Number,
    pub payment_method: &'a str,
    pub currency: &'a str,
}

impl<'a> From<&'a PaymentRequest> for PaymentInitRequest<'a> {
    fn from(
        PaymentRequest {
            reference_no,
            amount,
            payment_method,
            currency,
        }: &'a PaymentRequest,
    ) -> Self {
        Self {
            reference_no,
            amount,
            payment_method,
            currency,
        }
    }
}
