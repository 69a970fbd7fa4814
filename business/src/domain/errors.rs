/// Repository errors for domain layer.
///
/// Store failures carry the driver's cause text so the use cases can surface
/// it in their own messages.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("duplicate key error")]
    Duplicated,
    #[error("{0}")]
    DatabaseError(String),
    #[error("repository.mapping: {0}")]
    Mapping(String),
}

impl RepositoryError {
    pub fn duplicated() -> Self {
        RepositoryError::Duplicated
    }
    pub fn database_error(cause: impl ToString) -> Self {
        RepositoryError::DatabaseError(cause.to_string())
    }
    pub fn mapping(cause: impl ToString) -> Self {
        RepositoryError::Mapping(cause.to_string())
    }
}
