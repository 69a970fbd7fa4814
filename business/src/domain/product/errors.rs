use uuid::Uuid;

use crate::domain::errors::RepositoryError;

const NOT_FOUND_MESSAGE: &str = "Not Found";
const INSERTION_MESSAGE: &str = "Error inserting product";

/// Failures raised by the product use cases.
///
/// `NotFound` and `Insertion` are the recoverable kinds and always carry the
/// message shown to callers. `Repository` is an unexpected store failure on a
/// read path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProductError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Insertion(String),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl ProductError {
    pub fn not_found() -> Self {
        ProductError::NotFound(NOT_FOUND_MESSAGE.to_string())
    }

    pub fn insertion() -> Self {
        ProductError::Insertion(INSERTION_MESSAGE.to_string())
    }

    pub fn not_found_with_filter(id: Uuid) -> Self {
        ProductError::NotFound(format!("Product not found with filter: {id}"))
    }

    pub fn duplicated_name() -> Self {
        ProductError::Insertion("Product with this name already exists.".to_string())
    }

    pub fn insert_failed(cause: impl std::fmt::Display) -> Self {
        ProductError::Insertion(format!("Failed to insert product: {cause}"))
    }

    pub fn update_failed(cause: impl std::fmt::Display) -> Self {
        ProductError::Insertion(format!("Failed to update product: {cause}"))
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}
