use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::image::errors::ImageError;
use crate::domain::image::store::{ImageStore, StoredImage};
use crate::domain::image::use_cases::upload::{UploadImageParams, UploadImageUseCase};
use crate::domain::logger::Logger;

pub struct UploadImageUseCaseImpl {
    pub store: Arc<dyn ImageStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UploadImageUseCase for UploadImageUseCaseImpl {
    async fn execute(&self, params: UploadImageParams) -> Result<StoredImage, ImageError> {
        self.logger.info(&format!(
            "Uploading image {} to folder {}",
            params.upload.file_name, params.upload.folder
        ));

        let stored = self.store.upload(&params.upload).await?;

        self.logger
            .info(&format!("Image stored at: {}", stored.url));
        Ok(stored)
    }
}
