use reqwest::Client;

/// Shared HTTP client configuration for the catalog backend.
pub struct ApiClient {
    pub client: Client,
    pub base_url: String,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self { client, base_url }
    }

    pub fn categories_url(&self) -> String {
        format!("{}/api/category/getDataCategories", self.base_url)
    }

    pub fn new_category_url(&self) -> String {
        format!("{}/api/category/newCategory", self.base_url)
    }

    pub fn update_category_url(&self, id: i64) -> String {
        format!("{}/api/category/updateCategory/{}", self.base_url, id)
    }

    pub fn delete_category_url(&self, id: i64) -> String {
        format!("{}/api/category/deleteCategory/{}", self.base_url, id)
    }

    pub fn product_page_url(&self, page: u32, size: u32) -> String {
        format!(
            "{}/api/products/getAllProducts?page={}&size={}",
            self.base_url, page, size
        )
    }

    pub fn new_product_url(&self) -> String {
        format!("{}/api/products/newProduct", self.base_url)
    }

    pub fn update_product_url(&self, id: i64) -> String {
        format!("{}/api/products/updateProduct/{}", self.base_url, id)
    }

    pub fn delete_product_url(&self, id: i64) -> String {
        format!("{}/api/products/deleteProduct/{}", self.base_url, id)
    }

    pub fn upload_image_url(&self, folder: &str) -> String {
        format!("{}/api/images/upload/{}", self.base_url, folder)
    }
}
