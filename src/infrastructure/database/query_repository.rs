use crate::config::constants::TOKIO_RUNTIME;
use crate::domain::entities::pagination::PaginatedApplications;
use crate::domain::entities::query::{ApplicationQuery, SortColumn, SortDirection, SortState};
use crate::domain::errors::repository_error::RepositoryError;
use crate::infrastructure::database::conversion::{ToI64, ToU64};
use crate::infrastructure::database::entities::ApplicationEntity;
use crate::infrastructure::database::pool::SqliteRepositoryPool;
use crate::infrastructure::database::schema::applications;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::{Bool, Text};
use diesel::sqlite::Sqlite;
use diesel::{QueryDsl, RunQueryDsl};
use std::sync::Arc;

/// Repository for read-only, server-side paginated application queries.
pub struct QueryRepository {
    pool: Arc<SqliteRepositoryPool>,
}

impl QueryRepository {
    #[must_use]
    pub const fn new(pool: Arc<SqliteRepositoryPool>) -> Self {
        Self { pool }
    }

    fn search_pattern(term: &str) -> String {
        format!("%{term}%")
    }

    /// Builds the base query, restricted to rows matching the search pattern
    /// on the searchable columns (name and both timestamps, compared
    /// textually).
    fn filtered(pattern: Option<&String>) -> applications::BoxedQuery<'static, Sqlite> {
        let mut query_builder = applications::table.into_boxed();

        if let Some(pattern) = pattern {
            query_builder = query_builder.filter(
                sql::<Bool>("(name LIKE ")
                    .bind::<Text, _>(pattern.clone())
                    .sql(" OR created_at LIKE ")
                    .bind::<Text, _>(pattern.clone())
                    .sql(" OR updated_at LIKE ")
                    .bind::<Text, _>(pattern.clone())
                    .sql(")"),
            );
        }

        query_builder
    }

    fn ordered(
        query_builder: applications::BoxedQuery<'static, Sqlite>,
        sort: Option<SortState>,
    ) -> applications::BoxedQuery<'static, Sqlite> {
        use SortColumn::{CreatedAt, Name, UpdatedAt};
        use SortDirection::{Ascending, Descending};

        match sort {
            None => query_builder.order(applications::updated_at.desc()),
            Some(state) => match (state.column, state.direction) {
                (Name, Ascending) => query_builder.order(applications::name.asc()),
                (Name, Descending) => query_builder.order(applications::name.desc()),
                (CreatedAt, Ascending) => query_builder.order(applications::created_at.asc()),
                (CreatedAt, Descending) => query_builder.order(applications::created_at.desc()),
                (UpdatedAt, Ascending) => query_builder.order(applications::updated_at.asc()),
                (UpdatedAt, Descending) => query_builder.order(applications::updated_at.desc()),
            },
        }
    }
}

#[async_trait::async_trait]
impl crate::domain::ports::secondary::repositories::ApplicationQueryRepository
    for QueryRepository
{
    async fn search_applications_paginated(
        &self,
        query: ApplicationQuery,
        offset: u64,
        limit: u64,
    ) -> Result<PaginatedApplications, RepositoryError> {
        let pool = self.pool.clone();

        TOKIO_RUNTIME
            .handle()
            .spawn_blocking(move || {
                pool.execute_db_operation(|conn| {
                    let pattern = query.search.as_deref().map(Self::search_pattern);

                    let total_count: i64 =
                        Self::filtered(pattern.as_ref()).count().get_result(conn)?;

                    let entities = Self::ordered(Self::filtered(pattern.as_ref()), query.sort)
                        .limit(limit.to_i64_or_zero())
                        .offset(offset.to_i64_or_zero())
                        .load::<ApplicationEntity>(conn)?;

                    let items = entities.into_iter().map(Into::into).collect();

                    Ok(PaginatedApplications {
                        items,
                        total_count: total_count.to_u64_or_zero(),
                    })
                })
            })
            .await?
    }
}
