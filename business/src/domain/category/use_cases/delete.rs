use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;

pub struct DeleteCategoryParams {
    pub id: i64,
}

#[async_trait]
pub trait DeleteCategoryUseCase: Send + Sync {
    async fn execute(&self, params: DeleteCategoryParams) -> Result<(), CategoryError>;
}
