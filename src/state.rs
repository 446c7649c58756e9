use crate::gateway::PesapalGateway;

#[derive(Debug, Clone, axum::extract::FromRef)]
pub struct AppState {
    pub gate: PesapalGateway,
}

impl AppState {
    pub fn new(gate: PesapalGateway) -> Self {
        Self { gate }
    }
}
