use crate::domain::entities::application::ApplicationRecord;
use crate::domain::entities::pagination::PaginatedApplications;
use crate::domain::entities::query::ApplicationQuery;
use crate::domain::errors::repository_error::RepositoryError;

#[async_trait::async_trait]
pub trait ApplicationQueryRepository: Send + Sync {
    async fn search_applications_paginated(
        &self,
        query: ApplicationQuery,
        offset: u64,
        limit: u64,
    ) -> Result<PaginatedApplications, RepositoryError>;
}

#[async_trait::async_trait]
pub trait ApplicationCommandRepository: Send + Sync {
    /// Inserts a new application, or replaces the stored file and bumps
    /// `updated_at` when the name already exists.
    async fn upsert_application(
        &self,
        name: String,
        application_file: String,
    ) -> Result<ApplicationRecord, RepositoryError>;
}

pub trait SettingsRepository: Send + Sync {
    fn get_page_size(&self) -> Result<Option<usize>, RepositoryError>;
    fn set_page_size(&self, page_size: usize) -> Result<(), RepositoryError>;
}
