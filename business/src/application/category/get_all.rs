use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::gateway::CategoryGateway;
use crate::domain::category::model::Category;
use crate::domain::category::use_cases::get_all::GetCategoriesUseCase;
use crate::domain::logger::Logger;

pub struct GetCategoriesUseCaseImpl {
    pub gateway: Arc<dyn CategoryGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCategoriesUseCase for GetCategoriesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Category>, CategoryError> {
        self.logger.info("Fetching all categories");
        let categories = self.gateway.get_all().await?;
        self.logger
            .info(&format!("Found {} categories", categories.len()));
        Ok(categories)
    }
}
