use serde::{Deserialize, Serialize};

use business::domain::category::model::{Category, CategoryDraft};

/// Wire shape of a category as the backend returns it.
#[derive(Debug, Deserialize)]
pub struct CategoryEntity {
    #[serde(rename = "idCategoria")]
    pub id_categoria: i64,
    #[serde(rename = "nombreCategoria")]
    pub nombre_categoria: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    #[serde(rename = "fechaCreacion", default)]
    pub fecha_creacion: Option<String>,
}

impl CategoryEntity {
    pub fn into_domain(self) -> Category {
        Category::from_remote(
            self.id_categoria,
            self.nombre_categoria,
            self.descripcion,
            self.fecha_creacion,
        )
    }
}

/// Wire shape of a category create/update body.
#[derive(Debug, Serialize)]
pub struct CategoryPayload {
    #[serde(rename = "nombreCategoria")]
    pub nombre_categoria: String,
    pub descripcion: Option<String>,
}

impl CategoryPayload {
    pub fn from_draft(draft: &CategoryDraft) -> Self {
        Self {
            nombre_categoria: draft.name.clone(),
            descripcion: draft.description.clone(),
        }
    }
}
