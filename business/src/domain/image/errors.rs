/// Upload failures are kept distinct from entity-save failures so the
/// caller can abort a save before any entity payload is sent.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("image.upload_failed")]
    UploadFailed(#[from] crate::domain::errors::GatewayError),
}
