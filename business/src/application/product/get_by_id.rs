use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        self.repository
            .find_by_id(params.id)
            .await?
            .ok_or_else(|| ProductError::not_found_with_filter(params.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::ProductChanges;
    use crate::domain::product::value_objects::PriceRange;
    use bigdecimal::BigDecimal;
    use chrono::{DateTime, Utc};
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn insert(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError>;
            async fn find_many(&self, range: &PriceRange) -> Result<Vec<Product>, RepositoryError>;
            async fn find_and_update(
                &self,
                id: Uuid,
                changes: &ProductChanges,
                updated_at: DateTime<Utc>,
            ) -> Result<Option<Product>, RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_product_when_exists() {
        let product_id = Uuid::new_v4();
        let now = Utc::now();
        let mut mock_repo = MockProductRepo::new();

        mock_repo
            .expect_find_by_id()
            .withf(move |id| *id == product_id)
            .returning(move |_| {
                Ok(Some(Product::from_repository(
                    product_id,
                    "Iphone 14 Pro Max".to_string(),
                    10,
                    BigDecimal::from(8),
                    true,
                    now,
                    now,
                )))
            });

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(GetProductByIdParams { id: product_id })
            .await
            .unwrap();

        assert_eq!(product.id, product_id);
        assert_eq!(product.name, "Iphone 14 Pro Max");
    }

    #[tokio::test]
    async fn should_return_not_found_with_id_in_message() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let id = Uuid::parse_str("1e4f214e-85f7-461a-89d0-a751a32e3bb9").unwrap();
        let err = use_case
            .execute(GetProductByIdParams { id })
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ProductError::NotFound(
                "Product not found with filter: 1e4f214e-85f7-461a-89d0-a751a32e3bb9".to_string()
            )
        );
    }

    #[tokio::test]
    async fn should_propagate_unexpected_repository_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_id()
            .returning(|_| Err(RepositoryError::database_error("timeout")));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(GetProductByIdParams { id: Uuid::new_v4() })
            .await
            .unwrap_err();

        assert!(matches!(err, ProductError::Repository(_)));
    }
}
