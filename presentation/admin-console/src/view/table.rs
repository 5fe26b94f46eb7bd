use business::domain::category::model::Category;
use business::domain::product::model::Product;

const NO_RECORDS: &str = "No records yet";
const NO_IMAGE: &str = "No image";
const NO_DESCRIPTION: &str = "No description assigned";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowActionKind {
    Edit,
    Delete,
}

/// A per-row affordance, keyed by the entity it acts on. Handling lives in
/// one controller dispatch layer, not on the row itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAction {
    pub kind: RowActionKind,
    pub entity_id: i64,
}

#[derive(Debug, Clone)]
pub enum TableRow {
    Data {
        cells: Vec<String>,
        actions: Vec<RowAction>,
    },
    Placeholder(String),
}

impl TableRow {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, TableRow::Placeholder(_))
    }
}

/// A table described as data. Cell values are backend-supplied text and are
/// only ever printed verbatim, never interpreted as markup.
#[derive(Debug, Clone)]
pub struct TableView {
    pub columns: Vec<&'static str>,
    pub rows: Vec<TableRow>,
}

fn row_actions(entity_id: i64) -> Vec<RowAction> {
    vec![
        RowAction {
            kind: RowActionKind::Edit,
            entity_id,
        },
        RowAction {
            kind: RowActionKind::Delete,
            entity_id,
        },
    ]
}

pub fn product_table(products: &[Product]) -> TableView {
    let columns = vec![
        "ID",
        "Image",
        "Name",
        "Description",
        "Stock",
        "Date",
        "Price",
        "Actions",
    ];

    if products.is_empty() {
        return TableView {
            columns,
            rows: vec![TableRow::Placeholder(NO_RECORDS.to_string())],
        };
    }

    let rows = products
        .iter()
        .map(|product| TableRow::Data {
            cells: vec![
                product.id.to_string(),
                product
                    .image_url
                    .clone()
                    .unwrap_or_else(|| NO_IMAGE.to_string()),
                product.name.clone(),
                product.description.clone(),
                product.stock.to_string(),
                product.ingestion_date.to_string(),
                format!("${:.2}", product.price),
            ],
            actions: row_actions(product.id),
        })
        .collect();

    TableView { columns, rows }
}

pub fn category_table(categories: &[Category]) -> TableView {
    let columns = vec!["ID", "Name", "Description", "Created", "Actions"];

    if categories.is_empty() {
        return TableView {
            columns,
            rows: vec![TableRow::Placeholder(NO_RECORDS.to_string())],
        };
    }

    let rows = categories
        .iter()
        .map(|category| TableRow::Data {
            cells: vec![
                category.id.to_string(),
                category.name.clone(),
                category
                    .description
                    .clone()
                    .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
                category.created_at.clone().unwrap_or_default(),
            ],
            actions: row_actions(category.id),
        })
        .collect();

    TableView { columns, rows }
}
