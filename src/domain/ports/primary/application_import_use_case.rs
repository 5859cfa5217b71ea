use crate::domain::entities::application::{ApplicationBundle, ApplicationRecord};
use crate::domain::errors::domain_error::DomainError;

#[async_trait::async_trait]
pub trait ApplicationImportUseCase: Send + Sync {
    /// Validates and stores a bundle, returning the resulting record.
    /// An existing application of the same name is replaced in place.
    async fn import(&self, bundle: ApplicationBundle) -> Result<ApplicationRecord, DomainError>;
}
