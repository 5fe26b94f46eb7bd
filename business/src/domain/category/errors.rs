#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("category.name_empty")]
    NameEmpty,
    #[error("gateway.remote")]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
