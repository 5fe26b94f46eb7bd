use async_trait::async_trait;

use business::domain::category::gateway::CategoryGateway;
use business::domain::category::model::{Category, CategoryDraft};
use business::domain::errors::GatewayError;

use super::entity::{CategoryEntity, CategoryPayload};
use crate::client::ApiClient;

pub struct CategoryGatewayHttp {
    api: ApiClient,
}

impl CategoryGatewayHttp {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CategoryGateway for CategoryGatewayHttp {
    async fn get_all(&self) -> Result<Vec<Category>, GatewayError> {
        let response = self
            .api
            .client
            .get(self.api.categories_url())
            .send()
            .await
            .map_err(|_| GatewayError::Network)?;

        let entities: Vec<CategoryEntity> = response
            .json()
            .await
            .map_err(|_| GatewayError::MalformedResponse)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    // Mutations carry no consumable response body; only transport failures
    // are observable on these routes.
    async fn create(&self, draft: &CategoryDraft) -> Result<(), GatewayError> {
        self.api
            .client
            .post(self.api.new_category_url())
            .json(&CategoryPayload::from_draft(draft))
            .send()
            .await
            .map_err(|_| GatewayError::Network)?;

        Ok(())
    }

    async fn update(&self, id: i64, draft: &CategoryDraft) -> Result<(), GatewayError> {
        self.api
            .client
            .put(self.api.update_category_url(id))
            .json(&CategoryPayload::from_draft(draft))
            .send()
            .await
            .map_err(|_| GatewayError::Network)?;

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), GatewayError> {
        self.api
            .client
            .delete(self.api.delete_category_url(id))
            .send()
            .await
            .map_err(|_| GatewayError::Network)?;

        Ok(())
    }
}
