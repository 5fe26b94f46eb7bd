use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::gateway::ProductGateway;
use crate::domain::product::use_cases::get_page::{GetProductPageParams, GetProductPageUseCase};
use crate::domain::shared::page::ProductPage;

pub struct GetProductPageUseCaseImpl {
    pub gateway: Arc<dyn ProductGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductPageUseCase for GetProductPageUseCaseImpl {
    async fn execute(&self, params: GetProductPageParams) -> Result<ProductPage, ProductError> {
        self.logger.info(&format!(
            "Fetching product page {} (size {})",
            params.page, params.size
        ));

        let page = self.gateway.get_page(params.page, params.size).await?;

        self.logger.info(&format!(
            "Got {} products, page {} of {}",
            page.items.len(),
            page.number + 1,
            page.total_pages
        ));
        Ok(page)
    }
}
