use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::query::{QueryProductsParams, QueryProductsUseCase};
use crate::domain::product::value_objects::PriceRange;

pub struct QueryProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl QueryProductsUseCase for QueryProductsUseCaseImpl {
    async fn execute(&self, params: QueryProductsParams) -> Result<Vec<Product>, ProductError> {
        let range = PriceRange::new(params.min_price, params.max_price);
        self.logger
            .info(&format!("Querying products with price in {}", range));

        let products = self.repository.find_many(&range).await?;

        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::ProductChanges;
    use bigdecimal::BigDecimal;
    use chrono::{DateTime, Utc};
    use mockall::mock;
    use std::str::FromStr;
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

    fn make_product(name: &str, price: &str) -> Product {
        let now = Utc::now();
        Product::from_repository(
            Uuid::new_v4(),
            name.to_string(),
            1,
            BigDecimal::from_str(price).unwrap(),
            true,
            now,
            now,
        )
    }

    #[tokio::test]
    async fn should_pass_open_range_to_repository() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_many()
            .withf(|range| {
                range.min == Some(BigDecimal::from(5000)) && range.max == Some(BigDecimal::from(8000))
            })
            .times(1)
            .returning(|_| {
                Ok(vec![
                    make_product("Laptop Mid", "6500.00"),
                    make_product("Smartphone", "7000.00"),
                ])
            });

        let use_case = QueryProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case
            .execute(QueryProductsParams {
                min_price: Some(BigDecimal::from(5000)),
                max_price: Some(BigDecimal::from(8000)),
            })
            .await
            .unwrap();

        assert_eq!(products.len(), 2);
    }

    #[tokio::test]
    async fn should_query_without_filter_when_no_bounds() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_many()
            .withf(|range| range.is_unbounded())
            .returning(|_| Ok(vec![]));

        let use_case = QueryProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let products = use_case
            .execute(QueryProductsParams::default())
            .await
            .unwrap();

        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_many()
            .returning(|_| Err(RepositoryError::database_error("cursor killed")));

        let use_case = QueryProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(QueryProductsParams::default()).await;

        assert!(matches!(result, Err(ProductError::Repository(_))));
    }
}
