use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;

pub struct DeleteProductParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    /// Returns `false` when the product vanished between the existence check and the delete.
    async fn execute(&self, params: DeleteProductParams) -> Result<bool, ProductError>;
}
