use crate::domain::errors::repository_error::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error("Invalid application bundle: {0}")]
    InvalidBundle(String),
}
