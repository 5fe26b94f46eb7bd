use chrono::NaiveDate;

use super::errors::ProductError;
use crate::domain::shared::value_objects::OwnerId;

/// A product as the backend materializes it. The identifier is
/// backend-assigned and immutable; the owning user is not always present on
/// read responses.
#[derive(Debug, Clone)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub stock: u32,
    pub ingestion_date: NaiveDate,
    pub category_id: i64,
    pub owner_id: Option<OwnerId>,
    pub image_url: Option<String>,
}

impl Product {
    /// Constructor for data returned by the remote API (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_remote(
        id: i64,
        name: String,
        price: f64,
        description: String,
        stock: u32,
        ingestion_date: NaiveDate,
        category_id: i64,
        owner_id: Option<OwnerId>,
        image_url: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            price,
            description,
            stock,
            ingestion_date,
            category_id,
            owner_id,
            image_url,
        }
    }
}

pub struct NewProductDraftProps {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub stock: u32,
    pub ingestion_date: NaiveDate,
    pub category_id: i64,
    pub owner_id: OwnerId,
    pub image_url: Option<String>,
}

/// Write model for create and update calls. Whether the referenced category
/// exists is the backend's invariant, not checked here.
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub stock: u32,
    pub ingestion_date: NaiveDate,
    pub category_id: i64,
    pub owner_id: OwnerId,
    pub image_url: Option<String>,
}

impl ProductDraft {
    pub fn new(props: NewProductDraftProps) -> Result<Self, ProductError> {
        if props.name.trim().is_empty() {
            return Err(ProductError::NameEmpty);
        }

        if props.price < 0.0 {
            return Err(ProductError::PriceNegative);
        }

        Ok(Self {
            name: props.name,
            price: props.price,
            description: props.description,
            stock: props.stock,
            ingestion_date: props.ingestion_date,
            category_id: props.category_id,
            owner_id: props.owner_id,
            image_url: props.image_url,
        })
    }
}
