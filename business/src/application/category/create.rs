use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::gateway::CategoryGateway;
use crate::domain::category::model::CategoryDraft;
use crate::domain::category::use_cases::create::{CreateCategoryParams, CreateCategoryUseCase};
use crate::domain::logger::Logger;

pub struct CreateCategoryUseCaseImpl {
    pub gateway: Arc<dyn CategoryGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateCategoryUseCase for CreateCategoryUseCaseImpl {
    async fn execute(&self, params: CreateCategoryParams) -> Result<(), CategoryError> {
        self.logger
            .info(&format!("Creating category: {}", params.name));

        let draft = CategoryDraft::new(params.name, params.description)?;

        self.gateway.create(&draft).await?;

        self.logger.info("Category create request sent");
        Ok(())
    }
}
