use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::{NewProductDraftProps, ProductDraft};
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let draft = ProductDraft::new(NewProductDraftProps {
            name: params.name,
            price: params.price,
            description: params.description,
            stock: params.stock,
            ingestion_date: params.ingestion_date,
            category_id: params.category_id,
            owner_id: params.owner_id,
            image_url: params.image_url,
        })?;

        self.gateway.create(&draft).await?;

        self.logger.info("Product create request sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::GatewayError;
    use crate::domain::shared::page::ProductPage;
    use crate::domain::shared::value_objects::OwnerId;
    use chrono::NaiveDate;
    use mockall::mock;

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

    fn create_params(name: &str, price: f64) -> CreateProductParams {
        CreateProductParams {
            name: name.to_string(),
            price,
            description: "Single origin beans".to_string(),
            stock: 8,
            ingestion_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            category_id: 3,
            owner_id: OwnerId::new(2),
            image_url: None,
        }
    }

    #[tokio::test]
    async fn should_create_product_when_valid() {
        let mut mock_gw = MockProductGw::new();
        mock_gw.expect_create().times(1).returning(|_| Ok(()));

        let use_case = CreateProductUseCaseImpl {
            gateway: Arc::new(mock_gw),
            logger: mock_logger(),
        };

        let result = use_case.execute(create_params("Coffee Beans", 12.5)).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_product_when_name_empty() {
        let mut mock_gw = MockProductGw::new();
        mock_gw.expect_create().never();

        let use_case = CreateProductUseCaseImpl {
            gateway: Arc::new(mock_gw),
            logger: mock_logger(),
        };

        let result = use_case.execute(create_params("", 12.5)).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ProductError::NameEmpty));
    }

    #[tokio::test]
    async fn should_reject_product_when_price_negative() {
        let mut mock_gw = MockProductGw::new();
        mock_gw.expect_create().never();

        let use_case = CreateProductUseCaseImpl {
            gateway: Arc::new(mock_gw),
            logger: mock_logger(),
        };

        let result = use_case.execute(create_params("Coffee Beans", -1.0)).await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ProductError::PriceNegative));
    }
}
