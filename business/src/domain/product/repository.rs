use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductChanges};
use super::value_objects::PriceRange;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fails with `RepositoryError::Duplicated` when the name is already taken.
    async fn insert(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError>;
    async fn find_many(&self, range: &PriceRange) -> Result<Vec<Product>, RepositoryError>;
    /// Applies `changes` and `updated_at` in one step and returns the document after the update.
    async fn find_and_update(
        &self,
        id: Uuid,
        changes: &ProductChanges,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Product>, RepositoryError>;
    /// Returns the number of removed documents.
    async fn delete(&self, id: Uuid) -> Result<u64, RepositoryError>;
}
