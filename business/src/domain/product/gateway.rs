use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::shared::page::ProductPage;

use super::model::ProductDraft;

#[async_trait]
pub trait ProductGateway: Send + Sync {
    async fn get_page(&self, page: u32, size: u32) -> Result<ProductPage, GatewayError>;
    async fn create(&self, draft: &ProductDraft) -> Result<(), GatewayError>;
    async fn update(&self, id: i64, draft: &ProductDraft) -> Result<(), GatewayError>;
    async fn delete(&self, id: i64) -> Result<(), GatewayError>;
}
