use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductChanges};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::PriceRange;

/// Process-local product store with the same uniqueness rules as the MongoDB
/// collection. Listing returns products in insertion order.
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn insert(&self, product: &Product) -> Result<(), RepositoryError> {
        let mut products = self.products.write().await;

        if products
            .iter()
            .any(|p| p.id == product.id || p.name == product.name)
        {
            return Err(RepositoryError::duplicated());
        }

        products.push(product.clone());
        tracing::debug!(product_id = %product.id, "Stored product in memory");
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn find_many(&self, range: &PriceRange) -> Result<Vec<Product>, RepositoryError> {
        let products = self.products.read().await;
        Ok(products
            .iter()
            .filter(|p| range.contains(&p.price))
            .cloned()
            .collect())
    }

    async fn find_and_update(
        &self,
        id: Uuid,
        changes: &ProductChanges,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Product>, RepositoryError> {
        let mut products = self.products.write().await;

        if let Some(name) = &changes.name
            && products.iter().any(|p| p.id != id && &p.name == name)
        {
            return Err(RepositoryError::duplicated());
        }

        Ok(products.iter_mut().find(|p| p.id == id).map(|product| {
            product.apply_changes(changes, updated_at);
            product.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<u64, RepositoryError> {
        let mut products = self.products.write().await;
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok((before - products.len()) as u64)
    }
}
