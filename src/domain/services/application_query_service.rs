use crate::domain::entities::pagination::PaginatedApplications;
use crate::domain::entities::query::ApplicationQuery;
use crate::domain::errors::domain_error::DomainError;
use crate::domain::ports::primary::application_query_use_case::ApplicationQueryUseCase;
use crate::domain::ports::secondary::repositories::ApplicationQueryRepository;
use std::sync::Arc;

pub struct ApplicationQueryService {
    query_repo: Arc<dyn ApplicationQueryRepository>,
}

impl ApplicationQueryService {
    pub fn new(query_repo: Arc<dyn ApplicationQueryRepository>) -> Self {
        Self { query_repo }
    }
}

#[async_trait::async_trait]
impl ApplicationQueryUseCase for ApplicationQueryService {
    async fn list_applications(
        &self,
        query: ApplicationQuery,
        page: usize,
        page_size: usize,
    ) -> Result<PaginatedApplications, DomainError> {
        let offset = (page * page_size) as u64;
        let limit = page_size as u64;

        self.query_repo
            .search_applications_paginated(query, offset, limit)
            .await
            .map_err(DomainError::Repository)
    }
}
