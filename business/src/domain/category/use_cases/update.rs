use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;

pub struct UpdateCategoryParams {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

#[async_trait]
pub trait UpdateCategoryUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCategoryParams) -> Result<(), CategoryError>;
}
