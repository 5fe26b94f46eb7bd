/// Gateway errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway.network")]
    Network,
    #[error("gateway.malformed_response")]
    MalformedResponse,
    #[error("gateway.rejected")]
    Rejected,
}

impl GatewayError {
    pub fn network() -> Self {
        GatewayError::Network
    }
    pub fn malformed_response() -> Self {
        GatewayError::MalformedResponse
    }
    pub fn rejected() -> Self {
        GatewayError::Rejected
    }
}
