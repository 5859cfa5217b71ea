use crate::domain::entities::pagination::PaginatedApplications;
use crate::domain::entities::query::ApplicationQuery;
use crate::domain::errors::domain_error::DomainError;

#[async_trait::async_trait]
pub trait ApplicationQueryUseCase: Send + Sync {
    /// Fetches one page of the listing for the given criteria, together with
    /// the store-wide matching total.
    async fn list_applications(
        &self,
        query: ApplicationQuery,
        page: usize,
        page_size: usize,
    ) -> Result<PaginatedApplications, DomainError>;
}
