use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::product::errors::ProductError;
use crate::domain::shared::value_objects::OwnerId;

pub struct CreateProductParams {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub stock: u32,
    pub ingestion_date: NaiveDate,
    pub category_id: i64,
    pub owner_id: OwnerId,
    pub image_url: Option<String>,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<(), ProductError>;
}
