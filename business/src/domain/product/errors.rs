#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.price_negative")]
    PriceNegative,
    #[error("gateway.remote")]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
