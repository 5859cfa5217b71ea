use crate::domain::errors::repository_error::RepositoryError;
use crate::domain::ports::secondary::repositories::SettingsRepository;
use crate::infrastructure::database::pool::SqliteRepositoryPool;
use crate::infrastructure::database::schema::settings;
use diesel::prelude::*;
use diesel::{OptionalExtension, QueryDsl, RunQueryDsl};
use std::sync::Arc;

const PAGE_SIZE_KEY: &str = "page_size";

/// Key/value store for view preferences, currently the preferred page size.
pub struct SqliteSettingsRepository {
    pool: Arc<SqliteRepositoryPool>,
}

impl SqliteSettingsRepository {
    #[must_use]
    pub const fn new(pool: Arc<SqliteRepositoryPool>) -> Self {
        Self { pool }
    }
}

impl SettingsRepository for SqliteSettingsRepository {
    fn get_page_size(&self) -> Result<Option<usize>, RepositoryError> {
        self.pool.execute_db_operation(|conn| {
            let value: Option<String> = settings::table
                .filter(settings::key.eq(PAGE_SIZE_KEY))
                .select(settings::value)
                .first(conn)
                .optional()?;

            Ok(value.and_then(|v| v.parse().ok()))
        })
    }

    fn set_page_size(&self, page_size: usize) -> Result<(), RepositoryError> {
        self.pool.execute_db_operation(|conn| {
            diesel::replace_into(settings::table)
                .values((
                    settings::key.eq(PAGE_SIZE_KEY),
                    settings::value.eq(page_size.to_string()),
                ))
                .execute(conn)?;
            Ok(())
        })
    }
}
