use std::time::Duration;

use mongodb::{Client, Database, bson::doc, options::ClientOptions};
use thiserror::Error;
use tracing::info;

/// Used when the connection string names no database.
pub const DEFAULT_DATABASE: &str = "store";

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.configuration_error: {0}")]
    ConfigurationError(String),
    #[error("database.connection_error: {0}")]
    ConnectionError(String),
}

/// Configuration for the MongoDB connection
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub connection_string: String,
    pub database: Option<String>,
    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub connect_timeout: Duration,
    pub server_selection_timeout: Duration,
}

impl DatabaseConfig {
    /// Creates a new database configuration with default values
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            database: None,
            max_pool_size: 10,
            min_pool_size: 1,
            connect_timeout: Duration::from_secs(10),
            server_selection_timeout: Duration::from_secs(30),
        }
    }

    pub fn with_database(mut self, database: Option<String>) -> Self {
        self.database = database;
        self
    }
}

/// Connects to MongoDB, pings the server and returns the configured database.
///
/// The database is taken from `config.database`, then from the connection
/// string, then falls back to [`DEFAULT_DATABASE`].
pub async fn connect(config: &DatabaseConfig) -> Result<Database, DatabaseError> {
    let mut options = ClientOptions::parse(&config.connection_string)
        .await
        .map_err(|e| DatabaseError::ConfigurationError(e.to_string()))?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(config.connect_timeout);
    options.server_selection_timeout = Some(config.server_selection_timeout);

    let client = Client::with_options(options)
        .map_err(|e| DatabaseError::ConfigurationError(e.to_string()))?;

    let database = match &config.database {
        Some(name) => client.database(name),
        None => client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE)),
    };

    database
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| DatabaseError::ConnectionError(e.to_string()))?;

    info!(database = %database.name(), "Connected to MongoDB");
    Ok(database)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_apply_defaults() {
        let config = DatabaseConfig::new("mongodb://localhost:27017".to_string());

        assert_eq!(config.database, None);
        assert_eq!(config.max_pool_size, 10);
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn should_override_database() {
        let config = DatabaseConfig::new("mongodb://localhost:27017".to_string())
            .with_database(Some("catalog".to_string()));

        assert_eq!(config.database.as_deref(), Some("catalog"));
    }

    #[tokio::test]
    async fn should_reject_malformed_connection_string() {
        let config = DatabaseConfig::new("not-a-mongo-url".to_string());

        let result = connect(&config).await;

        assert!(matches!(result, Err(DatabaseError::ConfigurationError(_))));
    }
}
