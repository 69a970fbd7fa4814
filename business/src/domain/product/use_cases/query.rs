use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

#[derive(Default)]
pub struct QueryProductsParams {
    pub min_price: Option<BigDecimal>,
    pub max_price: Option<BigDecimal>,
}

#[async_trait]
pub trait QueryProductsUseCase: Send + Sync {
    async fn execute(&self, params: QueryProductsParams) -> Result<Vec<Product>, ProductError>;
}
