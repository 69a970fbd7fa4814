use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database, IndexModel,
    bson::doc,
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::{IndexOptions, ReturnDocument},
};
use tracing::instrument;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{Product, ProductChanges};
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::PriceRange;

use super::entity::{ProductEntity, id_filter, price_filter, update_pipeline};

pub const DEFAULT_COLLECTION: &str = "products";
const NAME_INDEX: &str = "name_unique";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// MongoDB adapter bound to a single product collection.
pub struct ProductRepositoryMongo {
    collection: Collection<ProductEntity>,
}

impl ProductRepositoryMongo {
    pub fn new(db: &Database) -> Self {
        Self::with_collection(db, DEFAULT_COLLECTION)
    }

    pub fn with_collection(db: &Database, collection_name: &str) -> Self {
        Self {
            collection: db.collection::<ProductEntity>(collection_name),
        }
    }

    /// Registers the unique index on `name`. Safe to call repeatedly.
    pub async fn init_indexes(&self) -> Result<(), RepositoryError> {
        let index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name(NAME_INDEX.to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_index(index)
            .await
            .map_err(map_mongo_error)?;
        tracing::info!(collection = %self.collection.name(), "Product indexes ready");
        Ok(())
    }
}

fn is_duplicate_key(err: &MongoError) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

fn map_mongo_error(err: MongoError) -> RepositoryError {
    if is_duplicate_key(&err) {
        RepositoryError::Duplicated
    } else {
        RepositoryError::database_error(err)
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryMongo {
    #[instrument(skip(self, product), fields(product_id = %product.id, product_name = %product.name))]
    async fn insert(&self, product: &Product) -> Result<(), RepositoryError> {
        let entity = ProductEntity::from_domain(product)?;
        self.collection
            .insert_one(&entity)
            .await
            .map_err(map_mongo_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError> {
        self.collection
            .find_one(id_filter(id))
            .await
            .map_err(map_mongo_error)?
            .map(ProductEntity::into_domain)
            .transpose()
    }

    #[instrument(skip(self, range), fields(range = %range))]
    async fn find_many(&self, range: &PriceRange) -> Result<Vec<Product>, RepositoryError> {
        let cursor = self
            .collection
            .find(price_filter(range)?)
            .await
            .map_err(map_mongo_error)?;
        let entities: Vec<ProductEntity> = cursor.try_collect().await.map_err(map_mongo_error)?;

        entities
            .into_iter()
            .map(ProductEntity::into_domain)
            .collect()
    }

    #[instrument(skip(self, changes))]
    async fn find_and_update(
        &self,
        id: Uuid,
        changes: &ProductChanges,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Product>, RepositoryError> {
        self.collection
            .find_one_and_update(id_filter(id), update_pipeline(changes, updated_at)?)
            .return_document(ReturnDocument::After)
            .await
            .map_err(map_mongo_error)?
            .map(ProductEntity::into_domain)
            .transpose()
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> Result<u64, RepositoryError> {
        let result = self
            .collection
            .delete_one(id_filter(id))
            .await
            .map_err(map_mongo_error)?;
        Ok(result.deleted_count)
    }
}
