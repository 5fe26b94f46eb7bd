use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::model::{NewProductDraftProps, ProductDraft};
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

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

        self.gateway.update(params.id, &draft).await?;

        self.logger
            .info(&format!("Product update request sent: {}", params.id));
        Ok(())
    }
}
