use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::shared::page::ProductPage;

pub struct GetProductPageParams {
    pub page: u32,
    pub size: u32,
}

#[async_trait]
pub trait GetProductPageUseCase: Send + Sync {
    async fn execute(&self, params: GetProductPageParams) -> Result<ProductPage, ProductError>;
}
