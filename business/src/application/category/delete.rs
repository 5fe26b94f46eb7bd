use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::category::errors::CategoryError;
use crate::domain::category::gateway::CategoryGateway;
use crate::domain::category::use_cases::delete::{DeleteCategoryParams, DeleteCategoryUseCase};
use crate::domain::logger::Logger;

pub struct DeleteCategoryUseCaseImpl {
    pub gateway: Arc<dyn CategoryGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteCategoryUseCase for DeleteCategoryUseCaseImpl {
    async fn execute(&self, params: DeleteCategoryParams) -> Result<(), CategoryError> {
        self.logger
            .info(&format!("Deleting category: {}", params.id));

        self.gateway.delete(params.id).await?;

        self.logger
            .info(&format!("Category delete request sent: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::model::{Category, CategoryDraft};
    use crate::domain::errors::GatewayError;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub CategoryGw {}

        #[async_trait]
        impl CategoryGateway for CategoryGw {
            async fn get_all(&self) -> Result<Vec<Category>, GatewayError>;
            async fn create(&self, draft: &CategoryDraft) -> Result<(), GatewayError>;
            async fn update(&self, id: i64, draft: &CategoryDraft) -> Result<(), GatewayError>;
            async fn delete(&self, id: i64) -> Result<(), GatewayError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_delete_category_with_given_id() {
        let mut mock_gw = MockCategoryGw::new();
        mock_gw
            .expect_delete()
            .with(eq(4))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteCategoryUseCaseImpl {
            gateway: Arc::new(mock_gw),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteCategoryParams { id: 4 }).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_propagate_gateway_failure() {
        let mut mock_gw = MockCategoryGw::new();
        mock_gw
            .expect_delete()
            .returning(|_| Err(GatewayError::Network));

        let use_case = DeleteCategoryUseCaseImpl {
            gateway: Arc::new(mock_gw),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteCategoryParams { id: 4 }).await;

        assert!(result.is_err());
    }
}
