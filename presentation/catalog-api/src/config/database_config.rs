use std::env;
use std::sync::Arc;

use anyhow::{Context, bail};
use business::domain::product::repository::ProductRepository;
use persistence::db::{DatabaseConfig, connect};
use persistence::product::memory::InMemoryProductRepository;
use persistence::product::repository::{DEFAULT_COLLECTION, ProductRepositoryMongo};

/// Storage selected with `DATABASE_BACKEND`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseBackend {
    MongoDb,
    Memory,
}

impl std::str::FromStr for DatabaseBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(DatabaseBackend::MongoDb),
            "memory" => Ok(DatabaseBackend::Memory),
            other => bail!("Unsupported DATABASE_BACKEND: {other}"),
        }
    }
}

/// Build the product repository from environment variables
///
/// Environment variables:
/// - DATABASE_BACKEND: "mongodb" (default) or "memory"
/// - MONGODB_URL: MongoDB connection string (required for "mongodb")
/// - MONGODB_DATABASE: database name (default: the one in MONGODB_URL, else "store")
/// - MONGODB_COLLECTION: collection name (default: "products")
///
/// The unique index on `name` is created here, once, before the server starts.
pub async fn init_product_repository() -> anyhow::Result<Arc<dyn ProductRepository>> {
    let backend: DatabaseBackend = env::var("DATABASE_BACKEND")
        .unwrap_or_else(|_| "mongodb".to_string())
        .parse()?;

    match backend {
        DatabaseBackend::Memory => {
            tracing::warn!("Using in-memory product storage; data is lost on restart");
            Ok(Arc::new(InMemoryProductRepository::new()))
        }
        DatabaseBackend::MongoDb => {
            let url = env::var("MONGODB_URL").context("MONGODB_URL must be set")?;
            let config = DatabaseConfig::new(url).with_database(env::var("MONGODB_DATABASE").ok());
            let collection = env::var("MONGODB_COLLECTION")
                .unwrap_or_else(|_| DEFAULT_COLLECTION.to_string());

            let database = connect(&config).await?;
            let repository = ProductRepositoryMongo::with_collection(&database, &collection);
            repository
                .init_indexes()
                .await
                .context("failed to create product indexes")?;
            Ok(Arc::new(repository))
        }
    }
}
