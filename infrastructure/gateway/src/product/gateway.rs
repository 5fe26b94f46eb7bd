use async_trait::async_trait;

use business::domain::errors::GatewayError;
use business::domain::product::gateway::ProductGateway;
use business::domain::product::model::ProductDraft;
use business::domain::shared::page::ProductPage;

use super::entity::{ProductPageEntity, ProductPayload};
use crate::client::ApiClient;

pub struct ProductGatewayHttp {
    api: ApiClient,
}

impl ProductGatewayHttp {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ProductGateway for ProductGatewayHttp {
    async fn get_page(&self, page: u32, size: u32) -> Result<ProductPage, GatewayError> {
        let response = self
            .api
            .client
            .get(self.api.product_page_url(page, size))
            .send()
            .await
            .map_err(|_| GatewayError::Network)?;

        let entity: ProductPageEntity = response
            .json()
            .await
            .map_err(|_| GatewayError::MalformedResponse)?;

        Ok(entity.into_domain())
    }

    // Mutations carry no consumable response body; only transport failures
    // are observable on these routes.
    async fn create(&self, draft: &ProductDraft) -> Result<(), GatewayError> {
        self.api
            .client
            .post(self.api.new_product_url())
            .json(&ProductPayload::from_draft(draft))
            .send()
            .await
            .map_err(|_| GatewayError::Network)?;

        Ok(())
    }

    async fn update(&self, id: i64, draft: &ProductDraft) -> Result<(), GatewayError> {
        self.api
            .client
            .put(self.api.update_product_url(id))
            .json(&ProductPayload::from_draft(draft))
            .send()
            .await
            .map_err(|_| GatewayError::Network)?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), GatewayError> {
        self.api
            .client
            .delete(self.api.delete_product_url(id))
            .send()
            .await
            .map_err(|_| GatewayError::Network)?;

        Ok(())
    }
}
