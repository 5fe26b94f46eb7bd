use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use business::domain::errors::GatewayError;
use business::domain::image::store::{ImageStore, ImageUpload, StoredImage};

use crate::client::ApiClient;

#[derive(Debug, Deserialize)]
struct StoredImageEntity {
    #[serde(default)]
    url: String,
}

pub struct ImageStoreHttp {
    api: ApiClient,
}

impl ImageStoreHttp {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ImageStore for ImageStoreHttp {
    async fn upload(&self, upload: &ImageUpload) -> Result<StoredImage, GatewayError> {
        let part = Part::bytes(upload.bytes.clone()).file_name(upload.file_name.clone());
        let form = Form::new().part("file", part);

        let response = self
            .api
            .client
            .post(self.api.upload_image_url(&upload.folder))
            .multipart(form)
            .send()
            .await
            .map_err(|_| GatewayError::Network)?;

        // Unlike the entity mutation routes, a failed upload must abort the
        // enclosing save, so the status code is checked here.
        if !response.status().is_success() {
            return Err(GatewayError::Rejected);
        }

        let entity: StoredImageEntity = response
            .json()
            .await
            .map_err(|_| GatewayError::MalformedResponse)?;

        Ok(StoredImage { url: entity.url })
    }
}
