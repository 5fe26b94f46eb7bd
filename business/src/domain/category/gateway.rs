use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::{Category, CategoryDraft};

#[async_trait]
pub trait CategoryGateway: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Category>, GatewayError>;
    async fn create(&self, draft: &CategoryDraft) -> Result<(), GatewayError>;
    async fn update(&self, id: i64, draft: &CategoryDraft) -> Result<(), GatewayError>;
    async fn delete(&self, id: i64) -> Result<(), GatewayError>;
}
