use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{NewProductProps, Product};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Creating product: {}", params.name));

        let product = Product::new(NewProductProps {
            name: params.name,
            quantity: params.quantity,
            price: params.price,
            status: params.status,
        });

        self.repository
            .insert(&product)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => ProductError::duplicated_name(),
                other => ProductError::insert_failed(other),
            })
            .inspect_err(|e| self.logger.warn(&e.message()))?;

        self.logger
            .info(&format!("Product created with id: {}", product.id));
        Ok(product)
    }
}
