use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::gateway::CategoryGateway;
use crate::domain::category::model::CategoryDraft;
use crate::domain::category::use_cases::update::{UpdateCategoryParams, UpdateCategoryUseCase};
use crate::domain::logger::Logger;

pub struct UpdateCategoryUseCaseImpl {
    pub gateway: Arc<dyn CategoryGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCategoryUseCase for UpdateCategoryUseCaseImpl {
    async fn execute(&self, params: UpdateCategoryParams) -> Result<(), CategoryError> {
        self.logger
            .info(&format!("Updating category: {}", params.id));

        let draft = CategoryDraft::new(params.name, params.description)?;

        self.gateway.update(params.id, &draft).await?;

        self.logger
            .info(&format!("Category update request sent: {}", params.id));
        Ok(())
    }
}
