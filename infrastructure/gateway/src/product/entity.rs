use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use business::domain::product::model::{Product, ProductDraft};
use business::domain::shared::page::ProductPage;
use business::domain::shared::value_objects::OwnerId;

/// Wire shape of a product as the backend returns it.
#[derive(Debug, Deserialize)]
pub struct ProductEntity {
    pub id: i64,
    pub nombre: String,
    pub precio: f64,
    #[serde(default)]
    pub descripcion: String,
    pub stock: u32,
    #[serde(rename = "fechaIngreso")]
    pub fecha_ingreso: NaiveDate,
    #[serde(rename = "categoriaId")]
    pub categoria_id: i64,
    #[serde(rename = "usuarioId", default)]
    pub usuario_id: Option<i64>,
    #[serde(default)]
    pub imagen_url: Option<String>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_remote(
            self.id,
            self.nombre,
            self.precio,
            self.descripcion,
            self.stock,
            self.fecha_ingreso,
            self.categoria_id,
            self.usuario_id.map(OwnerId::new),
            self.imagen_url,
        )
    }
}

/// Wire shape of the paged list response: `{ content, number, totalPages }`.
#[derive(Debug, Deserialize)]
pub struct ProductPageEntity {
    #[serde(default)]
    pub content: Vec<ProductEntity>,
    pub number: u32,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

impl ProductPageEntity {
    pub fn into_domain(self) -> ProductPage {
        ProductPage {
            items: self.content.into_iter().map(|e| e.into_domain()).collect(),
            number: self.number,
            total_pages: self.total_pages,
        }
    }
}

/// Wire shape of a product create/update body.
#[derive(Debug, Serialize)]
pub struct ProductPayload {
    pub nombre: String,
    pub precio: f64,
    pub descripcion: String,
    pub stock: u32,
    #[serde(rename = "fechaIngreso")]
    pub fecha_ingreso: NaiveDate,
    #[serde(rename = "categoriaId")]
    pub categoria_id: i64,
    #[serde(rename = "usuarioId")]
    pub usuario_id: i64,
    pub imagen_url: Option<String>,
}

impl ProductPayload {
    pub fn from_draft(draft: &ProductDraft) -> Self {
        Self {
            nombre: draft.name.clone(),
            precio: draft.price,
            descripcion: draft.description.clone(),
            stock: draft.stock,
            fecha_ingreso: draft.ingestion_date,
            categoria_id: draft.category_id,
            usuario_id: draft.owner_id.value(),
            imagen_url: draft.image_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::product::model::NewProductDraftProps;

    #[test]
    fn should_deserialize_paged_response() {
        let json = r#"{
            "content": [{
                "id": 1,
                "nombre": "Widget",
                "precio": 9.99,
                "descripcion": "A widget",
                "stock": 5,
                "fechaIngreso": "2024-05-01",
                "categoriaId": 3,
                "usuarioId": 2,
                "imagen_url": null
            }],
            "number": 0,
            "totalPages": 3
        }"#;

        let entity: ProductPageEntity = serde_json::from_str(json).unwrap();
        let page = entity.into_domain();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.number, 0);
        assert_eq!(page.total_pages, 3);

        let product = &page.items[0];
        assert_eq!(product.id, 1);
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, 9.99);
        assert_eq!(product.stock, 5);
        assert_eq!(
            product.ingestion_date,
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
        assert_eq!(product.owner_id, Some(OwnerId::new(2)));
        assert!(product.image_url.is_none());
    }

    #[test]
    fn should_tolerate_missing_content() {
        let json = r#"{"number": 0, "totalPages": 0}"#;

        let entity: ProductPageEntity = serde_json::from_str(json).unwrap();

        assert!(entity.content.is_empty());
    }

    #[test]
    fn should_serialize_payload_with_backend_field_names() {
        let draft = ProductDraft::new(NewProductDraftProps {
            name: "Widget".to_string(),
            price: 9.99,
            description: "A widget".to_string(),
            stock: 5,
            ingestion_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            category_id: 3,
            owner_id: OwnerId::new(2),
            image_url: None,
        })
        .unwrap();

        let payload = ProductPayload::from_draft(&draft);
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["nombre"], "Widget");
        assert_eq!(json["precio"], 9.99);
        assert_eq!(json["fechaIngreso"], "2024-05-01");
        assert_eq!(json["categoriaId"], 3);
        assert_eq!(json["usuarioId"], 2);
        assert!(json["imagen_url"].is_null());
    }
}
