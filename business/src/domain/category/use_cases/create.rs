use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;

pub struct CreateCategoryParams {
    pub name: String,
    pub description: Option<String>,
}

#[async_trait]
pub trait CreateCategoryUseCase: Send + Sync {
    async fn execute(&self, params: CreateCategoryParams) -> Result<(), CategoryError>;
}
