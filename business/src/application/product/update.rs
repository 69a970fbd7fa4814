use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, current_timestamp};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        if params.changes.is_empty() {
            self.logger
                .debug("No fields provided; only updated_at is refreshed");
        }

        let updated = self
            .repository
            .find_and_update(params.id, &params.changes, current_timestamp())
            .await
            .map_err(ProductError::update_failed)
            .inspect_err(|e| self.logger.warn(&e.message()))?
            .ok_or_else(|| ProductError::not_found_with_filter(params.id))?;

        self.logger.info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}
