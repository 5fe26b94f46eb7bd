use async_trait::async_trait;

use crate::domain::image::errors::ImageError;
use crate::domain::image::store::{ImageUpload, StoredImage};

pub struct UploadImageParams {
    pub upload: ImageUpload,
}

#[async_trait]
pub trait UploadImageUseCase: Send + Sync {
    async fn execute(&self, params: UploadImageParams) -> Result<StoredImage, ImageError>;
}
