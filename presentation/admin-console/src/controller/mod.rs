pub mod category;
pub mod product;

use business::domain::category::errors::CategoryError;
use business::domain::image::errors::ImageError;
use business::domain::product::errors::ProductError;

/// User-visible failure raised by the shared form flows. Both entity slices
/// follow the same policy: the form stays open and the message is shown.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("no form is open")]
    NotOpen,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("could not upload the image, try again")]
    ImageUpload(#[from] ImageError),
    #[error("could not save the product")]
    Product(#[from] ProductError),
    #[error("could not save the category")]
    Category(#[from] CategoryError),
}
