use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        self.gateway.delete(params.id).await?;

        self.logger
            .info(&format!("Product delete request sent: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::GatewayError;
    use crate::domain::product::model::ProductDraft;
    use crate::domain::shared::page::ProductPage;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub ProductGw {}

        #[async_trait]
        impl ProductGateway for ProductGw {
            async fn get_page(&self, page: u32, size: u32) -> Result<ProductPage, GatewayError>;
            async fn create(&self, draft: &ProductDraft) -> Result<(), GatewayError>;
            async fn update(&self, id: i64, draft: &ProductDraft) -> Result<(), GatewayError>;
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
    async fn should_delete_product_exactly_once() {
        let mut mock_gw = MockProductGw::new();
        mock_gw
            .expect_delete()
            .with(eq(9))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteProductUseCaseImpl {
            gateway: Arc::new(mock_gw),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteProductParams { id: 9 }).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_propagate_gateway_failure() {
        let mut mock_gw = MockProductGw::new();
        mock_gw
            .expect_delete()
            .returning(|_| Err(GatewayError::Network));

        let use_case = DeleteProductUseCaseImpl {
            gateway: Arc::new(mock_gw),
            logger: mock_logger(),
        };

        let result = use_case.execute(DeleteProductParams { id: 9 }).await;

        assert!(result.is_err());
    }
}
