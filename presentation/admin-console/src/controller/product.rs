use std::sync::Arc;

use chrono::NaiveDate;

use business::domain::category::errors::CategoryError;
use business::domain::category::model::Category;
use business::domain::category::use_cases::get_all::GetCategoriesUseCase;
use business::domain::image::store::ImageUpload;
use business::domain::image::use_cases::upload::{UploadImageParams, UploadImageUseCase};
use business::domain::logger::Logger;
use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_page::{GetProductPageParams, GetProductPageUseCase};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::shared::page::ProductPage;
use business::domain::shared::value_objects::OwnerId;

use super::FormError;
use crate::view::form::{FormField, FormView};
use crate::view::pagination::{PaginationView, paginate};
use crate::view::table::{TableView, product_table};

pub const PAGE_SIZES: [u32; 3] = [5, 10, 20];
pub const DEFAULT_PAGE_SIZE: u32 = 10;

const IMAGE_FOLDER: &str = "products";

/// Pagination state passed into and out of every list load. Changing the
/// size always lands back on the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub page: u32,
    pub size: u32,
}

impl PageState {
    pub fn new(size: u32) -> Self {
        Self { page: 0, size }
    }

    pub fn with_page(self, page: u32) -> Self {
        Self { page, ..self }
    }

    pub fn with_size(self, size: u32) -> Self {
        Self { page: 0, size }
    }
}

/// A click on the rendered pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    Previous,
    Next,
    Select(u32),
}

/// The shared product form. Mode is carried by the hidden identifier:
/// empty means create, populated means edit.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub id: Option<i64>,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub stock: u32,
    pub ingestion_date: Option<NaiveDate>,
    pub category_id: Option<i64>,
    pub image_url: Option<String>,
    pub pending_image: Option<ImageUpload>,
}

impl ProductForm {
    fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name.clone(),
            price: product.price,
            description: product.description.clone(),
            stock: product.stock,
            ingestion_date: Some(product.ingestion_date),
            category_id: Some(product.category_id),
            image_url: product.image_url.clone(),
            pending_image: None,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn select_image(&mut self, file_name: String, bytes: Vec<u8>) {
        self.pending_image = Some(ImageUpload {
            file_name,
            bytes,
            folder: IMAGE_FOLDER.to_string(),
        });
    }

    /// Preview source: the pending file when one is selected, otherwise the
    /// stored URL.
    pub fn image_preview(&self) -> Option<String> {
        self.pending_image
            .as_ref()
            .map(|upload| upload.file_name.clone())
            .or_else(|| self.image_url.clone())
    }
}

pub struct ProductListView {
    pub table: TableView,
    pub pagination: PaginationView,
}

pub struct ProductController {
    get_page_use_case: Arc<dyn GetProductPageUseCase>,
    create_use_case: Arc<dyn CreateProductUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
    upload_image_use_case: Arc<dyn UploadImageUseCase>,
    get_categories_use_case: Arc<dyn GetCategoriesUseCase>,
    logger: Arc<dyn Logger>,
    owner_id: OwnerId,
    state: PageState,
    last_page: ProductPage,
    form: Option<ProductForm>,
}

impl ProductController {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        get_page_use_case: Arc<dyn GetProductPageUseCase>,
        create_use_case: Arc<dyn CreateProductUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
        upload_image_use_case: Arc<dyn UploadImageUseCase>,
        get_categories_use_case: Arc<dyn GetCategoriesUseCase>,
        logger: Arc<dyn Logger>,
        owner_id: OwnerId,
    ) -> Self {
        Self {
            get_page_use_case,
            create_use_case,
            update_use_case,
            delete_use_case,
            upload_image_use_case,
            get_categories_use_case,
            logger,
            owner_id,
            state: PageState::new(DEFAULT_PAGE_SIZE),
            last_page: ProductPage::empty(),
            form: None,
        }
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    /// Fetch the page described by the current state and describe it as
    /// table plus pagination strip.
    pub async fn load(&mut self) -> Result<ProductListView, ProductError> {
        let page = self
            .get_page_use_case
            .execute(GetProductPageParams {
                page: self.state.page,
                size: self.state.size,
            })
            .await?;

        self.last_page = page;
        Ok(self.current_view())
    }

    fn current_view(&self) -> ProductListView {
        ProductListView {
            table: product_table(&self.last_page.items),
            pagination: paginate(self.last_page.number, self.last_page.total_pages),
        }
    }

    /// Single dispatch layer for the pagination strip. A disabled end
    /// control is a no-op; a selected index is requested as-is, even past
    /// the last known page.
    pub async fn dispatch_page(&mut self, event: PageEvent) -> Result<ProductListView, ProductError> {
        let current = self.last_page.number;
        let total = self.last_page.total_pages;

        let target = match event {
            PageEvent::Previous if current > 0 => Some(current - 1),
            PageEvent::Next if current + 1 < total => Some(current + 1),
            PageEvent::Select(index) => Some(index),
            _ => None,
        };

        match target {
            Some(page) => {
                self.state = self.state.with_page(page);
                self.load().await
            }
            None => Ok(self.current_view()),
        }
    }

    /// Size changes land back on the first page and reload exactly once.
    pub async fn change_page_size(&mut self, size: u32) -> Result<ProductListView, ProductError> {
        if !PAGE_SIZES.contains(&size) {
            self.logger
                .warn(&format!("Ignoring unsupported page size: {}", size));
            return Ok(self.current_view());
        }

        self.state = self.state.with_size(size);
        self.load().await
    }

    /// Categories for the form's selector.
    pub async fn category_options(&self) -> Result<Vec<Category>, CategoryError> {
        self.get_categories_use_case.execute().await
    }

    pub fn open_create(&mut self) -> FormView {
        self.form = Some(ProductForm::default());
        self.form_view().expect("form was just opened")
    }

    /// Copies the selected row's record into the form; the populated
    /// identifier is what switches submission to update.
    pub fn open_edit(&mut self, id: i64) -> Option<FormView> {
        let product = self.last_page.items.iter().find(|p| p.id == id)?;
        self.form = Some(ProductForm::from_product(product));
        self.form_view()
    }

    pub fn form_mut(&mut self) -> Option<&mut ProductForm> {
        self.form.as_mut()
    }

    pub fn form_view(&self) -> Option<FormView> {
        let form = self.form.as_ref()?;
        let title = if form.is_edit() {
            "Edit Product"
        } else {
            "Add Product"
        };

        Some(FormView {
            title: title.to_string(),
            fields: vec![
                FormField {
                    label: "Name",
                    value: form.name.clone(),
                },
                FormField {
                    label: "Price",
                    value: format!("{}", form.price),
                },
                FormField {
                    label: "Description",
                    value: form.description.clone(),
                },
                FormField {
                    label: "Stock",
                    value: form.stock.to_string(),
                },
                FormField {
                    label: "Date",
                    value: form
                        .ingestion_date
                        .map(|d| d.to_string())
                        .unwrap_or_default(),
                },
                FormField {
                    label: "Category",
                    value: form
                        .category_id
                        .map(|id| id.to_string())
                        .unwrap_or_default(),
                },
            ],
            image_preview: form.image_preview(),
        })
    }

    pub fn cancel(&mut self) {
        self.form = None;
    }

    /// Submit the open form. A freshly selected image is uploaded first and
    /// its URL becomes the payload's reference; without one the stored URL
    /// is sent unchanged. Upload failure aborts before any entity call. On
    /// success the form closes and the list reloads with the pagination
    /// state untouched; on failure the form stays open.
    pub async fn submit(&mut self) -> Result<ProductListView, FormError> {
        let form = self.form.clone().ok_or(FormError::NotOpen)?;

        let category_id = form.category_id.ok_or(FormError::MissingField("category"))?;
        let ingestion_date = form
            .ingestion_date
            .ok_or(FormError::MissingField("date"))?;

        let image_url = match &form.pending_image {
            Some(upload) => {
                let stored = self
                    .upload_image_use_case
                    .execute(UploadImageParams {
                        upload: upload.clone(),
                    })
                    .await?;
                Some(stored.url).filter(|url| !url.is_empty())
            }
            None => form.image_url.clone(),
        };

        match form.id {
            Some(id) => {
                self.update_use_case
                    .execute(UpdateProductParams {
                        id,
                        name: form.name.clone(),
                        price: form.price,
                        description: form.description.clone(),
                        stock: form.stock,
                        ingestion_date,
                        category_id,
                        owner_id: self.owner_id,
                        image_url,
                    })
                    .await?
            }
            None => {
                self.create_use_case
                    .execute(CreateProductParams {
                        name: form.name.clone(),
                        price: form.price,
                        description: form.description.clone(),
                        stock: form.stock,
                        ingestion_date,
                        category_id,
                        owner_id: self.owner_id,
                        image_url,
                    })
                    .await?
            }
        }

        self.form = None;

        match self.load().await {
            Ok(view) => Ok(view),
            Err(e) => {
                // Saved but the repaint fetch failed; keep the previous
                // table on screen.
                self.logger
                    .error(&format!("Reload after save failed: {}", e));
                Ok(self.current_view())
            }
        }
    }

    /// Exactly one delete call followed by exactly one list reload.
    pub async fn delete(&mut self, id: i64) -> Result<ProductListView, ProductError> {
        self.delete_use_case
            .execute(DeleteProductParams { id })
            .await?;

        self.load().await
    }
}
