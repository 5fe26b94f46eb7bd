use async_trait::async_trait;

use crate::domain::errors::GatewayError;

/// A file selected for upload, scoped to a backend storage folder.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub folder: String,
}

/// The backend's record of a stored image.
#[derive(Debug, Clone)]
pub struct StoredImage {
    pub url: String,
}

#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn upload(&self, upload: &ImageUpload) -> Result<StoredImage, GatewayError>;
}
